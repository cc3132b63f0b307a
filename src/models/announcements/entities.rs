use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告，class_id 为空表示全校
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub class_id: Option<i64>,
}
