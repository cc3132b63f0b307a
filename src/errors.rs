//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_admin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_admin_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    DuplicateEntry("E004", "Duplicate Entry"),
    ForeignKey("E005", "Foreign Key Violation"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    IdentityProvider("E012", "Identity Provider Error"),
    Capacity("E013", "Capacity Exceeded"),
    FileOperation("E014", "File Operation Error"),
}

impl SchoolAdminError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 给数据库错误加上操作上下文，同时保留唯一键/外键冲突的分类
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                SchoolAdminError::DuplicateEntry(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                SchoolAdminError::ForeignKey(format!("{context}: {detail}"))
            }
            _ => SchoolAdminError::DatabaseOperation(format!("{context}: {err}")),
        }
    }
}

/// `map_err` 用的简写：`.map_err(db_err("创建课程失败"))`
pub fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> SchoolAdminError {
    move |err| SchoolAdminError::from_db(context, err)
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for SchoolAdminError {
    fn from(err: DbErr) -> Self {
        SchoolAdminError::from_db("Database error", err)
    }
}

impl From<std::io::Error> for SchoolAdminError {
    fn from(err: std::io::Error) -> Self {
        SchoolAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolAdminError {
    fn from(err: serde_json::Error) -> Self {
        SchoolAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolAdminError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolAdminError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolAdminError::database_config("test").code(), "E001");
        assert_eq!(SchoolAdminError::duplicate_entry("test").code(), "E004");
        assert_eq!(SchoolAdminError::validation("test").code(), "E006");
        assert_eq!(SchoolAdminError::identity_provider("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolAdminError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            SchoolAdminError::authorization("test").error_type(),
            "Authorization Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolAdminError::validation("Lesson name is required!");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Lesson name is required!"));
    }

    #[test]
    fn test_plain_db_error_is_database_operation() {
        let err = SchoolAdminError::from_db("查询失败", DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().starts_with("查询失败"));
    }
}
