use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

use super::entities::Day;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub day: Day,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub subject_id: i64,
    pub class_id: i64,
    pub teacher_id: String,
}

impl LessonRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.name, "Lesson name is required!")?;
        validate::validate_time_range(
            self.start_time,
            self.end_time,
            "End time must be after start time!",
        )?;
        if self.subject_id <= 0 {
            return Err(SchoolAdminError::validation("Subject is required!"));
        }
        if self.class_id <= 0 {
            return Err(SchoolAdminError::validation("Class is required!"));
        }
        validate::require_text(&self.teacher_id, "Teacher is required!")
    }
}
