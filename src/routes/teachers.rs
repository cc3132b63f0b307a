use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::teachers::requests::TeacherRequest;
use crate::services::TeacherService;

static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn get_teacher(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, id.into_inner()).await
}

pub async fn create_teacher(
    req: HttpRequest,
    body: web::Json<TeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(&req, body.into_inner()).await
}

pub async fn update_teacher(
    req: HttpRequest,
    body: web::Json<TeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_teacher(&req, body.into_inner()).await
}

pub async fn delete_teacher(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, id.into_inner()).await
}

pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher))
                    .route(web::put().to(update_teacher)),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_teacher)
                            // 详情页只对工作人员开放
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(web::delete().to(delete_teacher)),
            ),
    );
}
