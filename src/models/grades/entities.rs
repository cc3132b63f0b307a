use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub level: i32,
}
