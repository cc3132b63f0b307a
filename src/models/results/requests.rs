use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub score: i32,
    #[serde(default)]
    pub exam_id: Option<i64>,
    #[serde(default)]
    pub assignment_id: Option<i64>,
    pub student_id: String,
}

impl ResultRequest {
    pub fn validate(&self) -> Result<()> {
        if self.score < 0 {
            return Err(SchoolAdminError::validation("Score must not be negative!"));
        }
        validate::require_text(&self.student_id, "Student is required!")?;
        match (self.exam_id, self.assignment_id) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(SchoolAdminError::validation(
                "A result belongs to exactly one exam or assignment!",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(exam_id: Option<i64>, assignment_id: Option<i64>) -> ResultRequest {
        ResultRequest {
            id: None,
            score: 90,
            exam_id,
            assignment_id,
            student_id: "user_s1".into(),
        }
    }

    #[test]
    fn test_exactly_one_source() {
        assert!(request(Some(1), None).validate().is_ok());
        assert!(request(None, Some(2)).validate().is_ok());
        assert!(request(None, None).validate().is_err());
        assert!(request(Some(1), Some(2)).validate().is_err());
    }
}
