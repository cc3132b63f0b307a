use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendances::requests::AttendanceRequest;
use crate::services::AttendanceService;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn create_attendance(
    req: HttpRequest,
    body: web::Json<AttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_attendance(&req, body.into_inner())
        .await
}

pub async fn update_attendance(
    req: HttpRequest,
    body: web::Json<AttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(&req, body.into_inner())
        .await
}

pub async fn delete_attendance(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(&req, id.into_inner())
        .await
}

pub fn configure_attendances_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendances")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::post().to(create_attendance))
                    .route(web::put().to(update_attendance)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_attendance))),
    );
}
