//! 考试存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    exams::{entities::Exam, requests::ExamRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_exams_impl(&self, query: &ListQuery) -> Result<PaginatedResponse<Exam>> {
        let mut select = Exams::find();

        if let Some(visible) = scope::exams(&query.viewer) {
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
            .fetch_page(select, query.page, "查询考试列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_exam()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_exam_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询考试失败"))?;

        Ok(result.map(|m| m.into_exam()))
    }

    pub async fn create_exam_impl(&self, req: &ExamRequest) -> Result<Exam> {
        let model = ActiveModel {
            title: Set(req.title.trim().to_string()),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            lesson_id: Set(req.lesson_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建考试失败"))?;

        Ok(result.into_exam())
    }

    pub async fn update_exam_impl(&self, id: i64, req: &ExamRequest) -> Result<Option<Exam>> {
        if self.get_exam_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            title: Set(req.title.trim().to_string()),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            lesson_id: Set(req.lesson_id),
        };

        let result = model.update(&self.db).await.map_err(db_err("更新考试失败"))?;

        Ok(Some(result.into_exam()))
    }

    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除考试失败"))?;

        Ok(result.rows_affected > 0)
    }
}
