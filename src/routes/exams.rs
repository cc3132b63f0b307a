use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::ExamRequest;
use crate::services::ExamService;

static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req, query.into_inner()).await
}

pub async fn create_exam(
    req: HttpRequest,
    body: web::Json<ExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, body.into_inner()).await
}

pub async fn update_exam(
    req: HttpRequest,
    body: web::Json<ExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.update_exam(&req, body.into_inner()).await
}

pub async fn delete_exam(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, id.into_inner()).await
}

pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_exams))
                    .route(web::post().to(create_exam))
                    .route(web::put().to(update_exam)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_exam))),
    );
}
