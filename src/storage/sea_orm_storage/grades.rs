//! 年级与管理员存储操作

use super::SeaOrmStorage;
use crate::entity::admins;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, db_err};
use crate::models::grades::entities::Grade;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let models = Grades::find()
            .order_by_asc(Column::Level)
            .all(&self.db)
            .await
            .map_err(db_err("查询年级失败"))?;

        Ok(models.into_iter().map(|m| m.into_grade()).collect())
    }

    pub async fn create_grade_impl(&self, level: i32) -> Result<Grade> {
        let model = ActiveModel {
            level: Set(level),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建年级失败"))?;

        Ok(result.into_grade())
    }

    /// 仍被班级或学生引用时外键会拒绝删除
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除年级失败"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_admins_impl(&self) -> Result<u64> {
        admins::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计管理员失败"))
    }

    pub async fn create_admin_impl(&self, id: &str, username: &str) -> Result<()> {
        admins::ActiveModel {
            id: Set(id.to_string()),
            username: Set(username.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("创建管理员失败"))?;

        Ok(())
    }
}
