use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn role_counts(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.role_counts(&req).await
}

pub async fn sex_counts(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.sex_counts(&req).await
}

pub async fn attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.attendance(&req).await
}

pub async fn schedule(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.schedule(&req, query.into_inner()).await
}

pub async fn events(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.events(&req, query.into_inner()).await
}

pub async fn announcements(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.announcements(&req).await
}

pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                // 全校统计只给管理员
                web::scope("/stats")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/counts", web::get().to(role_counts))
                    .route("/sex", web::get().to(sex_counts))
                    .route("/attendance", web::get().to(attendance)),
            )
            .route("/schedule", web::get().to(schedule))
            .route("/events", web::get().to(events))
            .route("/announcements", web::get().to(announcements)),
    );
}
