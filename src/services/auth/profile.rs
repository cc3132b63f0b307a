use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::SessionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 当前会话
pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_session(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SessionResponse { user },
            "Session retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing session",
        ))),
    }
}
