use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::SubjectRequest;
use crate::services::SubjectService;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn create_subject(
    req: HttpRequest,
    body: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.create_subject(&req, body.into_inner()).await
}

pub async fn update_subject(
    req: HttpRequest,
    body: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.update_subject(&req, body.into_inner()).await
}

pub async fn delete_subject(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, id.into_inner()).await
}

pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject))
                    .route(web::put().to(update_subject)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_subject))),
    );
}
