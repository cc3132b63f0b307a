//! 写操作共用的权限检查和结果消息

use crate::errors::{Result, SchoolAdminError};
use crate::models::{ActionResult, Viewer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            Verb::Create => "created",
            Verb::Update => "updated",
            Verb::Delete => "deleted",
        }
    }
}

fn with_article(entity: &str) -> String {
    let noun = entity.to_lowercase();
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {noun}"),
        _ => format!("a {noun}"),
    }
}

pub fn not_authorized(verb: Verb, entity: &str) -> SchoolAdminError {
    SchoolAdminError::authorization(format!(
        "You are not authorized to {} {}.",
        verb.as_str(),
        with_article(entity)
    ))
}

pub fn ensure_admin(viewer: &Viewer, verb: Verb, entity: &str) -> Result<()> {
    if viewer.is_admin() {
        Ok(())
    } else {
        Err(not_authorized(verb, entity))
    }
}

pub fn missing_id(entity: &str) -> SchoolAdminError {
    SchoolAdminError::validation(format!("{entity} ID is missing"))
}

pub fn not_found(entity: &str) -> SchoolAdminError {
    SchoolAdminError::not_found(format!("{entity} not found."))
}

pub fn completed(verb: Verb, entity: &str) -> ActionResult {
    ActionResult::ok(format!("{entity} {} successfully!", verb.past_tense()))
}

/// 在边界处把错误折叠成统一结果
pub fn into_action_result(result: Result<ActionResult>) -> ActionResult {
    result.unwrap_or_else(|err| ActionResult::from_error(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::entities::UserRole;

    #[test]
    fn test_not_authorized_message() {
        assert_eq!(
            not_authorized(Verb::Create, "Exam").message(),
            "You are not authorized to create an exam."
        );
        assert_eq!(
            not_authorized(Verb::Delete, "Teacher").message(),
            "You are not authorized to delete a teacher."
        );
    }

    #[test]
    fn test_ensure_admin() {
        let admin = Viewer::new(UserRole::Admin, "admin1");
        assert!(ensure_admin(&admin, Verb::Update, "Class").is_ok());
        let err = ensure_admin(&Viewer::new(UserRole::Teacher, "t1"), Verb::Update, "Class")
            .unwrap_err();
        assert_eq!(err.error_type(), "Authorization Error");
    }

    #[test]
    fn test_messages() {
        assert_eq!(missing_id("Lesson").message(), "Lesson ID is missing");
        assert_eq!(not_found("Student").message(), "Student not found.");
        assert_eq!(
            completed(Verb::Update, "Announcement").message.as_deref(),
            Some("Announcement updated successfully!")
        );
    }

    #[test]
    fn test_into_action_result() {
        let failed = into_action_result(Err(not_found("Event")));
        assert!(!failed.success);
        assert!(failed.error);
        assert_eq!(failed.message.as_deref(), Some("Event not found."));
    }
}
