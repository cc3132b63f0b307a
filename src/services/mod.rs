pub mod actions;
pub mod announcements;
pub mod assignments;
pub mod attendances;
pub mod auth;
pub mod classes;
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

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use attendances::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use events::EventService;
pub use exams::ExamService;
pub use forms::FormService;
pub use grades::GradeService;
pub use lessons::LessonService;
pub use parents::ParentService;
pub use results::ResultService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use serde::Serialize;
use tracing::{error, info};
use ts_rs::TS;

use crate::cache::ObjectCache;
use crate::errors::{Result, SchoolAdminError};
use crate::identity::IdentityProvider;
use crate::middlewares::RequireJWT;
use crate::models::{ActionResult, ApiResponse, ErrorCode, PaginatedResponse, Viewer};
use crate::storage::Storage;

pub(crate) fn storage_from(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn identity_from(request: &HttpRequest) -> Arc<dyn IdentityProvider> {
    request
        .app_data::<web::Data<Arc<dyn IdentityProvider>>>()
        .expect("Identity provider not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn cache_from(request: &HttpRequest) -> Arc<dyn ObjectCache> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone()
}

/// 从 RequireJWT 放入的会话中取出调用者
pub(crate) fn current_viewer(request: &HttpRequest) -> std::result::Result<Viewer, HttpResponse> {
    RequireJWT::extract_session(request)
        .map(|user| Viewer::from(&user))
        .ok_or_else(|| {
            HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing session",
            ))
        })
}

/// 错误对应的 HTTP 状态码和业务码
pub(crate) fn error_status(err: &SchoolAdminError) -> (StatusCode, ErrorCode) {
    match err {
        SchoolAdminError::DuplicateEntry(_) => (StatusCode::CONFLICT, ErrorCode::DuplicateEntry),
        SchoolAdminError::Validation(_) | SchoolAdminError::DateParse(_) => {
            (StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed)
        }
        SchoolAdminError::Capacity(_) => (StatusCode::BAD_REQUEST, ErrorCode::ClassCapacityFull),
        SchoolAdminError::ForeignKey(_) => (StatusCode::BAD_REQUEST, ErrorCode::DatabaseFailed),
        SchoolAdminError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
        SchoolAdminError::Authorization(_) => (StatusCode::FORBIDDEN, ErrorCode::Forbidden),
        SchoolAdminError::Authentication(_) => (StatusCode::UNAUTHORIZED, ErrorCode::AuthFailed),
        SchoolAdminError::IdentityProvider(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::IdentityProviderFailed,
        ),
        SchoolAdminError::DatabaseOperation(_) | SchoolAdminError::DatabaseConnection(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseFailed)
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
        ),
    }
}

/// 写操作的 HTTP 响应，body 中始终带 `{success, error, message}`
pub(crate) fn action_response(result: Result<ActionResult>, created: bool) -> HttpResponse {
    match result {
        Ok(outcome) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let message = outcome.message.clone().unwrap_or_default();
            HttpResponse::build(status).json(ApiResponse::success(outcome, message))
        }
        Err(err) => {
            let (status, code) = error_status(&err);
            if status.is_server_error() {
                error!("Action failed: {}", err);
            } else {
                info!("Action rejected: {}", err);
            }
            let outcome = ActionResult::from_error(&err);
            let message = outcome.message.clone().unwrap_or_default();
            HttpResponse::build(status).json(ApiResponse::error(code, outcome, message))
        }
    }
}

/// 读接口的 HTTP 响应
pub(crate) fn data_response<T: TS + Serialize>(
    result: Result<T>,
    message: &str,
) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(err) => {
            let (status, code) = error_status(&err);
            if status.is_server_error() {
                error!("{} failed: {}", message, err);
            }
            HttpResponse::build(status).json(ApiResponse::error_empty(code, err.message()))
        }
    }
}

pub(crate) fn list_response<T: TS + Serialize>(
    result: Result<PaginatedResponse<T>>,
    message: &str,
) -> HttpResponse {
    data_response(result, message)
}

/// 账号变更或删除后清掉其会话缓存
pub(crate) async fn forget_session(request: &HttpRequest, account_id: &str) {
    cache_from(request)
        .remove(&crate::cache::session_key(account_id))
        .await;
}
