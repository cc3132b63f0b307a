use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub level: i32,
}

impl CreateGradeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.level < 1 {
            return Err(SchoolAdminError::validation("Grade level must be positive!"));
        }
        Ok(())
    }
}
