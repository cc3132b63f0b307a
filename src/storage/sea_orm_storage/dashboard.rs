//! 看板统计

use super::SeaOrmStorage;
use crate::entity::{admins, lessons, parents, students, teachers};
use crate::errors::{Result, db_err};
use crate::models::dashboard::responses::{RoleCounts, SexCounts};
use crate::models::lessons::entities::Lesson;
use crate::models::people::UserSex;
use crate::storage::ScheduleOwner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 各角色人数
    pub async fn count_role_members_impl(&self) -> Result<RoleCounts> {
        let admins = admins::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计管理员失败"))?;
        let teachers = teachers::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计教师失败"))?;
        let students = students::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计学生失败"))?;
        let parents = parents::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计家长失败"))?;

        Ok(RoleCounts {
            admins,
            teachers,
            students,
            parents,
        })
    }

    /// 男女生人数
    pub async fn count_students_by_sex_impl(&self) -> Result<SexCounts> {
        let boys = students::Entity::find()
            .filter(students::Column::Sex.eq(UserSex::Male.as_str()))
            .count(&self.db)
            .await
            .map_err(db_err("统计学生性别失败"))?;
        let girls = students::Entity::find()
            .filter(students::Column::Sex.eq(UserSex::Female.as_str()))
            .count(&self.db)
            .await
            .map_err(db_err("统计学生性别失败"))?;

        Ok(SexCounts { boys, girls })
    }

    /// 某位教师或某个班级的全部课程
    pub async fn list_schedule_impl(&self, owner: &ScheduleOwner) -> Result<Vec<Lesson>> {
        let select = match owner {
            ScheduleOwner::Teacher(teacher_id) => {
                lessons::Entity::find().filter(lessons::Column::TeacherId.eq(teacher_id.as_str()))
            }
            ScheduleOwner::Class(class_id) => {
                lessons::Entity::find().filter(lessons::Column::ClassId.eq(*class_id))
            }
        };

        let models = select
            .order_by_asc(lessons::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err("查询课表失败"))?;

        Ok(models.into_iter().map(|m| m.into_lesson()).collect())
    }
}
