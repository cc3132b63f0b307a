use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::people::optional_text;
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub capacity: i32,
    #[serde(default)]
    pub supervisor_id: Option<String>,
    pub grade_id: i64,
}

impl ClassRequest {
    pub fn validate(&self) -> Result<()> {
        validate::require_text(&self.name, "Class name is required!")?;
        if self.capacity < 1 {
            return Err(SchoolAdminError::validation("Capacity is required!"));
        }
        if self.grade_id <= 0 {
            return Err(SchoolAdminError::validation("Grade is required!"));
        }
        Ok(())
    }

    pub fn supervisor_id(&self) -> Option<String> {
        optional_text(&self.supervisor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_capacity_must_be_positive() {
        let request = ClassRequest {
            id: None,
            name: "1A".into(),
            capacity: 0,
            supervisor_id: Some(String::new()),
            grade_id: 1,
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "Capacity is required!");
        assert_eq!(request.supervisor_id(), None);
    }
}
