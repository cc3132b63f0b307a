//! 科目存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, scope};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model};
use crate::entity::teacher_subjects;
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    subjects::{entities::Subject, requests::SubjectRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn list_subjects_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Subject>> {
        let mut select = Subjects::find();

        if let Some(visible) = scope::subjects(&query.viewer) {
            select = select.filter(visible);
        }

        if let Some(teacher_id) = query.filter("teacherId") {
            let subject_ids = teacher_subjects::Entity::find()
                .select_only()
                .column(teacher_subjects::Column::SubjectId)
                .filter(teacher_subjects::Column::TeacherId.eq(teacher_id))
                .into_query();
            select = select.filter(Column::Id.in_subquery(subject_ids));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Name, search));
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询科目列表失败")
            .await?;
        let items = self.attach_teachers(models).await?;

        Ok(PaginatedResponse::new(items, query.page, total))
    }

    pub async fn get_subject_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询科目失败"))?;

        match result {
            Some(model) => Ok(self.attach_teachers(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn create_subject_impl(&self, req: &SubjectRequest) -> Result<Subject> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_err("创建科目失败"))?;

        let teacher_ids = replace_teachers(&txn, model.id, &req.teachers).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(model.into_subject(teacher_ids))
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        req: &SubjectRequest,
    ) -> Result<Option<Subject>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let existing = Subjects::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询科目失败"))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
        }
        .update(&txn)
        .await
        .map_err(db_err("更新科目失败"))?;

        let teacher_ids = replace_teachers(&txn, id, &req.teachers).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(Some(model.into_subject(teacher_ids)))
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除科目失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 为一页科目补上任课教师
    async fn attach_teachers(&self, models: Vec<Model>) -> Result<Vec<Subject>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut by_subject: HashMap<i64, Vec<String>> = HashMap::new();

        if !ids.is_empty() {
            let links = teacher_subjects::Entity::find()
                .filter(teacher_subjects::Column::SubjectId.is_in(ids))
                .order_by_asc(teacher_subjects::Column::TeacherId)
                .all(&self.db)
                .await
                .map_err(db_err("查询科目教师失败"))?;
            for link in links {
                by_subject
                    .entry(link.subject_id)
                    .or_default()
                    .push(link.teacher_id);
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let teacher_ids = by_subject.remove(&m.id).unwrap_or_default();
                m.into_subject(teacher_ids)
            })
            .collect())
    }
}

/// 用给定的教师集合替换科目现有的任课教师，返回写入后的教师 id
async fn replace_teachers<C: ConnectionTrait>(
    conn: &C,
    subject_id: i64,
    teacher_ids: &[String],
) -> Result<Vec<String>> {
    teacher_subjects::Entity::delete_many()
        .filter(teacher_subjects::Column::SubjectId.eq(subject_id))
        .exec(conn)
        .await
        .map_err(db_err("更新科目教师失败"))?;

    let mut unique: Vec<String> = teacher_ids
        .iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();
    unique.sort();
    unique.dedup();
    if unique.is_empty() {
        return Ok(unique);
    }

    let links = unique.iter().map(|teacher_id| teacher_subjects::ActiveModel {
        teacher_id: Set(teacher_id.clone()),
        subject_id: Set(subject_id),
    });
    teacher_subjects::Entity::insert_many(links)
        .exec(conn)
        .await
        .map_err(db_err("更新科目教师失败"))?;

    Ok(unique)
}
