//! 家长存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::parents::{ActiveModel, Column, Entity as Parents};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    parents::{entities::Parent, requests::ParentRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_parents_impl(&self, query: &ListQuery) -> Result<PaginatedResponse<Parent>> {
        let mut select = Parents::find();

        if let Some(visible) = scope::parents(&query.viewer) {
            select = select.filter(visible);
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Name, search));
        }

        select = select.order_by_asc(Column::CreatedAt).order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询家长列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_parent()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_parent_impl(&self, id: &str) -> Result<Option<Parent>> {
        let result = Parents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询家长失败"))?;

        Ok(result.map(|m| m.into_parent()))
    }

    pub async fn create_parent_impl(&self, id: &str, req: &ParentRequest) -> Result<Parent> {
        let mut model = active_model_from(req);
        model.id = Set(id.to_string());
        model.created_at = Set(chrono::Utc::now().timestamp());

        let result = model.insert(&self.db).await.map_err(db_err("创建家长失败"))?;

        Ok(result.into_parent())
    }

    pub async fn update_parent_impl(
        &self,
        id: &str,
        req: &ParentRequest,
    ) -> Result<Option<Parent>> {
        if self.get_parent_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id.to_string());

        let result = model.update(&self.db).await.map_err(db_err("更新家长失败"))?;

        Ok(Some(result.into_parent()))
    }

    /// 仍有孩子关联时外键会拒绝删除
    pub async fn delete_parent_impl(&self, id: &str) -> Result<bool> {
        let result = Parents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除家长失败"))?;

        Ok(result.rows_affected > 0)
    }
}

fn active_model_from(req: &ParentRequest) -> ActiveModel {
    ActiveModel {
        username: Set(req.account.username.trim().to_string()),
        name: Set(req.account.name.trim().to_string()),
        surname: Set(req.account.surname.trim().to_string()),
        email: Set(req.account.email()),
        phone: Set(req.phone.trim().to_string()),
        address: Set(req.address.trim().to_string()),
        ..Default::default()
    }
}
