use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SchoolAdminError;

pub const DUPLICATE_ENTRY_MESSAGE: &str =
    "Duplicate entry. A user with this username/email already exists.";

/// 写操作的统一结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/action.ts")]
pub struct ActionResult {
    pub success: bool,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: false,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: true,
            message: Some(message.into()),
        }
    }

    /// 按错误类别生成对外消息
    pub fn from_error(err: &SchoolAdminError) -> Self {
        let message = match err {
            SchoolAdminError::DuplicateEntry(_) => DUPLICATE_ENTRY_MESSAGE.to_string(),
            SchoolAdminError::DatabaseOperation(msg)
            | SchoolAdminError::DatabaseConnection(msg)
            | SchoolAdminError::ForeignKey(msg) => format!("Database error: {msg}"),
            SchoolAdminError::IdentityProvider(msg) => format!("Identity provider error: {msg}"),
            other => other.message().to_string(),
        };
        Self::failed(message)
    }
}

impl From<SchoolAdminError> for ActionResult {
    fn from(err: SchoolAdminError) -> Self {
        ActionResult::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_entry_message() {
        let result = ActionResult::from_error(&SchoolAdminError::duplicate_entry(
            "UNIQUE constraint failed: teachers.username",
        ));
        assert!(!result.success);
        assert!(result.error);
        assert_eq!(result.message.as_deref(), Some(DUPLICATE_ENTRY_MESSAGE));
    }

    #[test]
    fn test_passthrough_messages() {
        let db = ActionResult::from_error(&SchoolAdminError::database_operation("disk full"));
        assert_eq!(db.message.as_deref(), Some("Database error: disk full"));

        let idp = ActionResult::from_error(&SchoolAdminError::identity_provider(
            "That username is taken. Please try another.",
        ));
        assert_eq!(
            idp.message.as_deref(),
            Some("Identity provider error: That username is taken. Please try another.")
        );

        let missing = ActionResult::from_error(&SchoolAdminError::not_found("Teacher not found"));
        assert_eq!(missing.message.as_deref(), Some("Teacher not found"));
    }
}
