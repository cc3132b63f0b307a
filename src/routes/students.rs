use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::students::requests::StudentRequest;
use crate::services::StudentService;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn get_student(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, id.into_inner()).await
}

pub async fn create_student(
    req: HttpRequest,
    body: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(&req, body.into_inner()).await
}

pub async fn update_student(
    req: HttpRequest,
    body: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_student(&req, body.into_inner()).await
}

pub async fn delete_student(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, id.into_inner()).await
}

pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student))
                    .route(web::put().to(update_student)),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_student)
                            // 详情页只对工作人员开放
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(web::delete().to(delete_student)),
            ),
    );
}
