use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub class_id: Option<i64>,
}

impl EventRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.title, "Title is required!")?;
        validate::require_text(&self.description, "Description is required!")?;
        validate::validate_time_range(
            self.start_time,
            self.end_time,
            "End time must be after start time!",
        )
    }
}
