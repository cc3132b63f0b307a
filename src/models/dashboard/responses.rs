use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::announcements::entities::Announcement;
use crate::models::events::entities::Event;

// 各角色人数
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct RoleCounts {
    pub admins: u64,
    pub teachers: u64,
    pub students: u64,
    pub parents: u64,
}

// 学生男女人数
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct SexCounts {
    pub boys: u64,
    pub girls: u64,
}

// 某个工作日的出勤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct AttendanceDay {
    /// Mon / Tue / Wed / Thu / Fri
    pub name: String,
    pub present: u64,
    pub absent: u64,
}

// 课表条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct CalendarEntry {
    pub title: String,
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: chrono::DateTime<chrono::Utc>,
    pub all_day: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct EventsResponse {
    pub date: chrono::NaiveDate,
    pub items: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct AnnouncementsResponse {
    pub items: Vec<Announcement>,
}
