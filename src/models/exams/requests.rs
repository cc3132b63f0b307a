use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub lesson_id: i64,
}

impl ExamRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.title, "Title name is required!")?;
        validate::validate_time_range(
            self.start_time,
            self.end_time,
            "End time must be after start time!",
        )?;
        if self.lesson_id <= 0 {
            return Err(SchoolAdminError::validation("Lesson is required!"));
        }
        Ok(())
    }
}
