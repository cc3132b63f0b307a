use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub teachers: Vec<String>,
}

impl SubjectRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.name, "Subject name is required!")
    }
}
