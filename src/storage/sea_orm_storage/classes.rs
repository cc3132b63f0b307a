//! 班级存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    classes::{entities::Class, requests::ClassRequest},
};
use crate::utils::contains_insensitive;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 分页列出班级
    pub async fn list_classes_impl(&self, query: &ListQuery) -> Result<PaginatedResponse<Class>> {
        let mut select = Classes::find();

        if let Some(visible) = scope::classes(&query.viewer) {
            select = select.filter(visible);
        }

        // 班主任筛选
        if let Some(supervisor_id) = query.filter("supervisorId") {
            select = select.filter(Column::SupervisorId.eq(supervisor_id));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Name, search));
        }

        select = select.order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询班级列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_class()).collect(),
            query.page,
            total,
        ))
    }

    /// 通过 ID 获取班级
    pub async fn get_class_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 创建班级
    pub async fn create_class_impl(&self, req: &ClassRequest) -> Result<Class> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            capacity: Set(req.capacity),
            supervisor_id: Set(req.supervisor_id()),
            grade_id: Set(req.grade_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建班级失败"))?;

        Ok(result.into_class())
    }

    /// 更新班级信息
    pub async fn update_class_impl(&self, id: i64, req: &ClassRequest) -> Result<Option<Class>> {
        // 先检查班级是否存在
        if self.get_class_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            capacity: Set(req.capacity),
            supervisor_id: Set(req.supervisor_id()),
            grade_id: Set(req.grade_id),
        };

        let result = model.update(&self.db).await.map_err(db_err("更新班级失败"))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除班级失败"))?;

        Ok(result.rows_affected > 0)
    }
}
