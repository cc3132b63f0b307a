//! 课程存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::entity::{subjects, teachers};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    lessons::{entities::Lesson, requests::LessonRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Set,
};

impl SeaOrmStorage {
    /// 分页列出课程
    pub async fn list_lessons_impl(&self, query: &ListQuery) -> Result<PaginatedResponse<Lesson>> {
        let mut select = Lessons::find();

        if let Some(visible) = scope::lessons(&query.viewer) {
            select = select.filter(visible);
        }

        if let Some(class_id) = query.filter_id("classId") {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(teacher_id) = query.filter("teacherId") {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 课程名、科目名或教师名
        if let Some(search) = query.search() {
            let subject_ids = subjects::Entity::find()
                .select_only()
                .column(subjects::Column::Id)
                .filter(contains_insensitive(subjects::Column::Name, search))
                .into_query();
            let teacher_ids = teachers::Entity::find()
                .select_only()
                .column(teachers::Column::Id)
                .filter(contains_insensitive(teachers::Column::Name, search))
                .into_query();
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(Column::Name, search))
                    .add(Column::SubjectId.in_subquery(subject_ids))
                    .add(Column::TeacherId.in_subquery(teacher_ids)),
            );
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询课程列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_lesson()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_lesson_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程失败"))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    pub async fn create_lesson_impl(&self, req: &LessonRequest) -> Result<Lesson> {
        let result = active_model_from(req)
            .insert(&self.db)
            .await
            .map_err(db_err("创建课程失败"))?;

        Ok(result.into_lesson())
    }

    pub async fn update_lesson_impl(&self, id: i64, req: &LessonRequest) -> Result<Option<Lesson>> {
        if self.get_lesson_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id);

        let result = model.update(&self.db).await.map_err(db_err("更新课程失败"))?;

        Ok(Some(result.into_lesson()))
    }

    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除课程失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程是否由该教师任教
    pub async fn lesson_taught_by_impl(&self, lesson_id: i64, teacher_id: &str) -> Result<bool> {
        let count = Lessons::find()
            .filter(Column::Id.eq(lesson_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(db_err("查询课程失败"))?;

        Ok(count > 0)
    }
}

fn active_model_from(req: &LessonRequest) -> ActiveModel {
    ActiveModel {
        name: Set(req.name.trim().to_string()),
        day: Set(req.day.to_string()),
        start_time: Set(req.start_time.timestamp()),
        end_time: Set(req.end_time.timestamp()),
        subject_id: Set(req.subject_id),
        class_id: Set(req.class_id),
        teacher_id: Set(req.teacher_id.trim().to_string()),
        ..Default::default()
    }
}
