use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::AssignmentRequest;
use crate::services::AssignmentService;

static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(&req, query.into_inner()).await
}

pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<AssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.create_assignment(&req, body.into_inner()).await
}

pub async fn update_assignment(
    req: HttpRequest,
    body: web::Json<AssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.update_assignment(&req, body.into_inner()).await
}

pub async fn delete_assignment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, id.into_inner()).await
}

pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment))
                    .route(web::put().to(update_assignment)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_assignment))),
    );
}
