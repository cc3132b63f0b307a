/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>`，再按令牌中的账号 id 取出会话用户，
 * 放入请求扩展。会话先查缓存，未命中时回到身份提供方查询。
 *
 * ```rust,ignore
 * web::scope("/api/v1/lessons")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_lessons))
 * ```
 *
 * 处理程序中用 `RequireJWT::extract_session(&req)` 取得当前用户。
 */

use crate::cache::{CacheResult, ObjectCache, session_key};
use crate::identity::IdentityProvider;
use crate::models::ErrorCode;
use crate::models::auth::entities::SessionUser;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

async fn load_session(req: &ServiceRequest, account_id: &str) -> Result<SessionUser, String> {
    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();
    let key = session_key(account_id);

    if let CacheResult::Found(json) = cache.get_raw(&key).await {
        match serde_json::from_str::<SessionUser>(&json) {
            Ok(user) => return Ok(user),
            Err(_) => {
                info!("Dropping unreadable session cache entry for {}", account_id);
                cache.remove(&key).await;
            }
        }
    }

    let identity = req
        .app_data::<web::Data<Arc<dyn IdentityProvider>>>()
        .expect("Identity provider not found in app data")
        .get_ref()
        .clone();

    let account = identity
        .get_account(account_id)
        .await
        .map_err(|err| format!("Failed to load account: {}", err.message()))?
        .ok_or_else(|| "Account not found".to_string())?;

    let user = SessionUser::from(&account);
    if let Ok(json) = serde_json::to_string(&user) {
        cache.insert_raw(key, json).await;
    }
    Ok(user)
}

async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<SessionUser, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let user = load_session(req, &claims.sub).await?;

    // 角色以身份提供方为准，令牌里的角色过期时要求重新登录
    if user.role.as_str() != claims.role {
        return Err("Role changed, please log in again".to_string());
    }
    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    actix_web::HttpResponse::NoContent()
                        .finish()
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 当前会话用户，只能在 RequireJWT 之后使用
    pub fn extract_session(req: &actix_web::HttpRequest) -> Option<SessionUser> {
        req.extensions().get::<SessionUser>().cloned()
    }
}
