use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub present: bool,
    pub student_id: String,
    pub lesson_id: i64,
}
