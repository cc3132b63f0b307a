use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::ClassRequest;
use crate::services::ClassService;

static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    body: web::Json<ClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, body.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    body: web::Json<ClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.update_class(&req, body.into_inner()).await
}

pub async fn delete_class(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, id.into_inner()).await
}

pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class))
                    .route(web::put().to(update_class)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_class))),
    );
}
