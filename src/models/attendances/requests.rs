use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub present: bool,
    pub student_id: String,
    pub lesson_id: i64,
}

impl AttendanceRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.student_id, "Student is required!")?;
        if self.lesson_id <= 0 {
            return Err(SchoolAdminError::validation("Lesson is required!"));
        }
        Ok(())
    }
}
