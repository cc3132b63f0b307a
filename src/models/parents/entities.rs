use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 家长
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct Parent {
    pub id: String,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
