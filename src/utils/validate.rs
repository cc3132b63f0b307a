use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, SchoolAdminError};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub fn validate_username(username: &str) -> Result<()> {
    // 用户名长度校验：3 <= x <= 20
    let len = username.chars().count();
    if len < 3 {
        return Err(SchoolAdminError::validation(
            "Username must be at least 3 characters long!",
        ));
    }
    if len > 20 {
        return Err(SchoolAdminError::validation(
            "Username must be at most 20 characters long!",
        ));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(SchoolAdminError::validation(
            "Username must contain only letters, numbers, underscores or hyphens",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(SchoolAdminError::validation("Invalid email address!"));
    }
    Ok(())
}

/// 密码至少 8 位，且不能是常见弱密码
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < 8 {
        return Err(SchoolAdminError::validation(
            "Password must be at least 8 characters long!",
        ));
    }

    let weak_passwords = ["password", "12345678", "123456789", "qwerty123", "admin123"];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        return Err(SchoolAdminError::validation(
            "Password is too common, please choose a stronger password",
        ));
    }
    Ok(())
}

pub fn validate_blood_type(blood_type: &str) -> Result<()> {
    if blood_type.trim().is_empty() {
        return Err(SchoolAdminError::validation("Blood Type is required!"));
    }
    if !BLOOD_TYPES.contains(&blood_type.trim()) {
        return Err(SchoolAdminError::validation(format!(
            "Invalid blood type: {blood_type}"
        )));
    }
    Ok(())
}

/// 去掉首尾空白后不能为空
pub fn require_text(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchoolAdminError::validation(message));
    }
    Ok(())
}

pub fn validate_time_range(start: DateTime<Utc>, end: DateTime<Utc>, message: &str) -> Result<()> {
    if start >= end {
        return Err(SchoolAdminError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_length() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("a_very_long_username_x").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("Password").is_err());
        assert!(validate_password("lesson-plan-42").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("teacher@school.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_blood_type() {
        assert!(validate_blood_type("AB+").is_ok());
        assert!(validate_blood_type("").is_err());
        assert!(validate_blood_type("C+").is_err());
    }

    #[test]
    fn test_time_range() {
        let start = Utc::now();
        let end = start + chrono::Duration::hours(1);
        assert!(validate_time_range(start, end, "bad").is_ok());
        let err =
            validate_time_range(end, start, "End time must be after start time!").unwrap_err();
        assert_eq!(err.message(), "End time must be after start time!");
    }
}
