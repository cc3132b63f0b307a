use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};

// 上课日
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Day {
    type Err = SchoolAdminError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MONDAY" => Ok(Day::Monday),
            "TUESDAY" => Ok(Day::Tuesday),
            "WEDNESDAY" => Ok(Day::Wednesday),
            "THURSDAY" => Ok(Day::Thursday),
            "FRIDAY" => Ok(Day::Friday),
            _ => Err(SchoolAdminError::validation(format!("Invalid day: {s}"))),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Lesson {
    pub id: i64,
    pub name: String,
    pub day: Day,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub subject_id: i64,
    pub class_id: i64,
    pub teacher_id: String,
}
