//! 活动实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    pub class_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_event(self) -> crate::models::events::entities::Event {
        crate::models::events::entities::Event {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: super::timestamp_to_datetime(self.start_time),
            end_time: super::timestamp_to_datetime(self.end_time),
            class_id: self.class_id,
        }
    }
}
