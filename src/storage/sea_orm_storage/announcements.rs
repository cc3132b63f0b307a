//! 公告存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse, Viewer,
    announcements::{entities::Announcement, requests::AnnouncementRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn list_announcements_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Announcement>> {
        let mut select = Announcements::find();

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
            .fetch_page(select, query.page, "查询公告列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_announcement()).collect(),
            query.page,
            total,
        ))
    }

    pub async fn get_announcement_impl(&self, id: i64) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询公告失败"))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    pub async fn create_announcement_impl(
        &self,
        req: &AnnouncementRequest,
    ) -> Result<Announcement> {
        let result = active_model_from(req)
            .insert(&self.db)
            .await
            .map_err(db_err("创建公告失败"))?;

        Ok(result.into_announcement())
    }

    pub async fn update_announcement_impl(
        &self,
        id: i64,
        req: &AnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        if self.get_announcement_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id);

        let result = model.update(&self.db).await.map_err(db_err("更新公告失败"))?;

        Ok(Some(result.into_announcement()))
    }

    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除公告失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 最新的若干条可见公告
    pub async fn list_latest_announcements_impl(
        &self,
        viewer: &Viewer,
        limit: u64,
    ) -> Result<Vec<Announcement>> {
        let mut select = Announcements::find();

        if let Some(visible) = scope::class_bound(viewer, Column::ClassId) {
            select = select.filter(visible);
        }

        let models = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err("查询公告失败"))?;

        Ok(models.into_iter().map(|m| m.into_announcement()).collect())
    }
}

fn active_model_from(req: &AnnouncementRequest) -> ActiveModel {
    ActiveModel {
        title: Set(req.title.trim().to_string()),
        description: Set(req.description.trim().to_string()),
        date: Set(req.date.timestamp()),
        class_id: Set(req.class_id),
        ..Default::default()
    }
}
