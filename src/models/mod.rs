pub mod announcements;
pub mod assignments;
pub mod attendances;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod events;
pub mod exams;
pub mod forms;
pub mod grades;
pub mod lessons;
pub mod parents;
pub mod people;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use common::{ActionResult, ApiResponse, ITEM_PER_PAGE, ListQuery, PaginatedResponse, Viewer};

use serde::{Deserialize, Serialize};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 接口返回的业务码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,

    // 写操作
    ValidationFailed = 3000,
    DuplicateEntry = 3001,
    ClassCapacityFull = 3002,
    IdentityProviderFailed = 3003,
    DatabaseFailed = 3004,
}
