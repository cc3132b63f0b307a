use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lessons::requests::LessonRequest;
use crate::services::LessonService;

static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

pub async fn list_lessons(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_lessons(&req, query.into_inner()).await
}

pub async fn create_lesson(
    req: HttpRequest,
    body: web::Json<LessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.create_lesson(&req, body.into_inner()).await
}

pub async fn update_lesson(
    req: HttpRequest,
    body: web::Json<LessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.update_lesson(&req, body.into_inner()).await
}

pub async fn delete_lesson(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(&req, id.into_inner()).await
}

pub fn configure_lessons_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_lessons))
                    .route(web::post().to(create_lesson))
                    .route(web::put().to(update_lesson)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_lesson))),
    );
}
