use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub lesson_id: i64,
}

impl AssignmentRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.title, "Title is required!")?;
        if self.due_date < self.start_date {
            return Err(SchoolAdminError::validation(
                "Due date must not be before start date!",
            ));
        }
        if self.lesson_id <= 0 {
            return Err(SchoolAdminError::validation("Lesson is required!"));
        }
        Ok(())
    }
}
