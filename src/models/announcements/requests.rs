use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub class_id: Option<i64>,
}

impl AnnouncementRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.title, "Title is required!")?;
        validate::require_text(&self.description, "Description is required!")
    }
}
