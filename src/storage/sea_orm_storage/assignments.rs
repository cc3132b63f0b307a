//! 作业存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    assignments::{entities::Assignment, requests::AssignmentRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_assignments_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Assignment>> {
        let mut select = Assignments::find();

        if let Some(visible) = scope::assignments(&query.viewer) {
            select = select.filter(visible);
        }

        if let Some(class_id) = query.filter_id("classId") {
            let lessons = scope::lesson_ids_in_class(class_id);
            select = select.filter(Column::LessonId.in_subquery(lessons));
        }

        if let Some(teacher_id) = query.filter("teacherId") {
            let lessons = scope::lesson_ids_taught_by(teacher_id);
            select = select.filter(Column::LessonId.in_subquery(lessons));
        }

        if let Some(lesson_id) = query.filter_id("lessonId") {
            select = select.filter(Column::LessonId.eq(lesson_id));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Title, search));
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询作业列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_assignment()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_assignment_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询作业失败"))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn create_assignment_impl(&self, req: &AssignmentRequest) -> Result<Assignment> {
        let model = ActiveModel {
            title: Set(req.title.trim().to_string()),
            start_date: Set(req.start_date.timestamp()),
            due_date: Set(req.due_date.timestamp()),
            lesson_id: Set(req.lesson_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建作业失败"))?;

        Ok(result.into_assignment())
    }

    pub async fn update_assignment_impl(
        &self,
        id: i64,
        req: &AssignmentRequest,
    ) -> Result<Option<Assignment>> {
        if self.get_assignment_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            title: Set(req.title.trim().to_string()),
            start_date: Set(req.start_date.timestamp()),
            due_date: Set(req.due_date.timestamp()),
            lesson_id: Set(req.lesson_id),
        };

        let result = model.update(&self.db).await.map_err(db_err("更新作业失败"))?;

        Ok(Some(result.into_assignment()))
    }

    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除作业失败"))?;

        Ok(result.rows_affected > 0)
    }
}
