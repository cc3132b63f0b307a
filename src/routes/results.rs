use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::results::requests::ResultRequest;
use crate::services::ResultService;

static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn list_results(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_results(&req, query.into_inner()).await
}

pub async fn create_result(
    req: HttpRequest,
    body: web::Json<ResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.create_result(&req, body.into_inner()).await
}

pub async fn update_result(
    req: HttpRequest,
    body: web::Json<ResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.update_result(&req, body.into_inner()).await
}

pub async fn delete_result(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.delete_result(&req, id.into_inner()).await
}

pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_results))
                    .route(web::post().to(create_result))
                    .route(web::put().to(update_result)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_result))),
    );
}
