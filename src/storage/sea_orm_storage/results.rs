//! 成绩存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::results::{ActiveModel, Column, Entity as Results};
use crate::entity::students;
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    results::{entities::ResultRecord, requests::ResultRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    Set,
};

impl SeaOrmStorage {
    pub async fn list_results_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<ResultRecord>> {
        let mut select = Results::find();

        if let Some(visible) = scope::results(&query.viewer) {
            select = select.filter(visible);
        }

        if let Some(student_id) = query.filter("studentId") {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(exam_id) = query.filter_id("examId") {
            select = select.filter(Column::ExamId.eq(exam_id));
        }

        if let Some(assignment_id) = query.filter_id("assignmentId") {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        // 按学生姓名搜索
        if let Some(search) = query.search() {
            let student_ids = students::Entity::find()
                .select_only()
                .column(students::Column::Id)
                .filter(contains_insensitive(students::Column::Name, search))
                .into_query();
            select = select.filter(Column::StudentId.in_subquery(student_ids));
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询成绩列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_result()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_result_impl(&self, id: i64) -> Result<Option<ResultRecord>> {
        let result = Results::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询成绩失败"))?;

        Ok(result.map(|m| m.into_result()))
    }

    pub async fn create_result_impl(&self, req: &ResultRequest) -> Result<ResultRecord> {
        let result = active_model_from(req)
            .insert(&self.db)
            .await
            .map_err(db_err("创建成绩失败"))?;

        Ok(result.into_result())
    }

    pub async fn update_result_impl(
        &self,
        id: i64,
        req: &ResultRequest,
    ) -> Result<Option<ResultRecord>> {
        if self.get_result_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id);

        let result = model.update(&self.db).await.map_err(db_err("更新成绩失败"))?;

        Ok(Some(result.into_result()))
    }

    pub async fn delete_result_impl(&self, id: i64) -> Result<bool> {
        let result = Results::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除成绩失败"))?;

        Ok(result.rows_affected > 0)
    }
}

fn active_model_from(req: &ResultRequest) -> ActiveModel {
    ActiveModel {
        score: Set(req.score),
        exam_id: Set(req.exam_id),
        assignment_id: Set(req.assignment_id),
        student_id: Set(req.student_id.trim().to_string()),
        ..Default::default()
    }
}
