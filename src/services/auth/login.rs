use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::models::auth::entities::SessionUser;
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let identity = service.get_identity(request);
    let config = service.get_config();

    let account = match identity
        .verify_credentials(&login_request.username, &login_request.password)
        .await
    {
        Ok(Some(account)) => account,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Username or password is incorrect",
            )));
        }
        Err(e) => {
            error!("Credential check failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {}", e.message()),
                )),
            );
        }
    };

    match JwtUtils::generate_access_token(&account.id, account.role.as_str()) {
        Ok(access_token) => {
            info!("User {} logged in successfully", account.username);
            let response = LoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                user: SessionUser::from(&account),
                created_at: chrono::Utc::now(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
