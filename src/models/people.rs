//! 教师、学生、家长共用的人员字段

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub enum UserSex {
    Male,
    Female,
}

impl UserSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserSex::Male => "MALE",
            UserSex::Female => "FEMALE",
        }
    }
}

impl std::fmt::Display for UserSex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserSex {
    type Err = SchoolAdminError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MALE" => Ok(UserSex::Male),
            "FEMALE" => Ok(UserSex::Female),
            _ => Err(SchoolAdminError::validation("Sex is required!")),
        }
    }
}

/// 账号相关字段：用户名、密码、姓名、邮箱
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct AccountFields {
    pub username: String,
    /// 创建时必填，更新时为空表示不修改
    #[serde(default)]
    pub password: Option<String>,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AccountFields {
    pub fn validate(&self, creating: bool) -> Result<()> {
        validate::validate_username(&self.username)?;
        match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => validate::validate_password(password)?,
            None if creating => {
                return Err(SchoolAdminError::validation(
                    "Password must be at least 8 characters long!",
                ));
            }
            None => {}
        }
        validate::require_text(&self.name, "First name is required!")?;
        validate::require_text(&self.surname, "Last name is required!")?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate::validate_email(email)?;
        }
        Ok(())
    }

    /// 非空密码
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// 空字符串视为未填写
    pub fn email(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
    }
}

/// 空字符串视为未填写
pub fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
