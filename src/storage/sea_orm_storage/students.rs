//! 学生存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    people::optional_text,
    students::{entities::Student, requests::StudentRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 分页列出学生
    pub async fn list_students_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Student>> {
        let mut select = Students::find();

        if let Some(visible) = scope::students(&query.viewer) {
            select = select.filter(visible);
        }

        // 该教师任课班级的学生
        if let Some(teacher_id) = query.filter("teacherId") {
            let classes = scope::class_ids_taught_by(teacher_id);
            select = select.filter(Column::ClassId.in_subquery(classes));
        }

        if let Some(class_id) = query.filter_id("classId") {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Name, search));
        }

        select = select.order_by_asc(Column::CreatedAt).order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询学生列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_student()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_student_impl(&self, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生失败"))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 创建学生，id 来自身份提供方
    pub async fn create_student_impl(&self, id: &str, req: &StudentRequest) -> Result<Student> {
        let mut model = active_model_from(req);
        model.id = Set(id.to_string());
        model.created_at = Set(chrono::Utc::now().timestamp());

        let result = model.insert(&self.db).await.map_err(db_err("创建学生失败"))?;

        Ok(result.into_student())
    }

    pub async fn update_student_impl(
        &self,
        id: &str,
        req: &StudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id.to_string());

        let result = model.update(&self.db).await.map_err(db_err("更新学生失败"))?;

        Ok(Some(result.into_student()))
    }

    pub async fn delete_student_impl(&self, id: &str) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除学生失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 班级当前人数
    pub async fn count_students_in_class_impl(&self, class_id: i64) -> Result<u64> {
        Students::find()
            .filter(Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(db_err("统计班级人数失败"))
    }
}

fn active_model_from(req: &StudentRequest) -> ActiveModel {
    ActiveModel {
        username: Set(req.account.username.trim().to_string()),
        name: Set(req.account.name.trim().to_string()),
        surname: Set(req.account.surname.trim().to_string()),
        email: Set(req.account.email()),
        phone: Set(Some(req.phone.trim().to_string())),
        address: Set(req.address.trim().to_string()),
        img: Set(optional_text(&req.img)),
        blood_type: Set(req.blood_type.trim().to_string()),
        sex: Set(req.sex.to_string()),
        birthday: Set(req.birthday.timestamp()),
        parent_id: Set(req.parent_id.trim().to_string()),
        class_id: Set(req.class_id),
        grade_id: Set(req.grade_id),
        ..Default::default()
    }
}
