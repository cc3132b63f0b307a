//! 活动存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse, Viewer,
    events::{entities::Event, requests::EventRequest},
};
use crate::utils::contains_insensitive;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_events_impl(&self, query: &ListQuery) -> Result<PaginatedResponse<Event>> {
        let mut select = Events::find();

        if let Some(visible) = scope::class_bound(&query.viewer, Column::ClassId) {
            select = select.filter(visible);
        }

        if let Some(class_id) = query.filter_id("classId") {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Title, search));
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询活动列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_event()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_event_impl(&self, id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询活动失败"))?;

        Ok(result.map(|m| m.into_event()))
    }

    pub async fn create_event_impl(&self, req: &EventRequest) -> Result<Event> {
        let result = active_model_from(req)
            .insert(&self.db)
            .await
            .map_err(db_err("创建活动失败"))?;

        Ok(result.into_event())
    }

    pub async fn update_event_impl(&self, id: i64, req: &EventRequest) -> Result<Option<Event>> {
        if self.get_event_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id);

        let result = model.update(&self.db).await.map_err(db_err("更新活动失败"))?;

        Ok(Some(result.into_event()))
    }

    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = Events::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除活动失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 开始时间落在 [from, to) 内、调用者可见的活动
    pub async fn list_events_between_impl(
        &self,
        viewer: &Viewer,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        let mut select = Events::find()
            .filter(Column::StartTime.gte(from.timestamp()))
            .filter(Column::StartTime.lt(to.timestamp()));

        if let Some(visible) = scope::class_bound(viewer, Column::ClassId) {
            select = select.filter(visible);
        }

        let models = select
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err("查询活动失败"))?;

        Ok(models.into_iter().map(|m| m.into_event()).collect())
    }
}

fn active_model_from(req: &EventRequest) -> ActiveModel {
    ActiveModel {
        title: Set(req.title.trim().to_string()),
        description: Set(req.description.trim().to_string()),
        start_time: Set(req.start_time.timestamp()),
        end_time: Set(req.end_time.timestamp()),
        class_id: Set(req.class_id),
        ..Default::default()
    }
}
