use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::parents::requests::ParentRequest;
use crate::services::ParentService;

static PARENT_SERVICE: Lazy<ParentService> = Lazy::new(ParentService::new_lazy);

pub async fn list_parents(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_parents(&req, query.into_inner()).await
}

pub async fn get_parent(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.get_parent(&req, id.into_inner()).await
}

pub async fn create_parent(
    req: HttpRequest,
    body: web::Json<ParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.create_parent(&req, body.into_inner()).await
}

pub async fn update_parent(
    req: HttpRequest,
    body: web::Json<ParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.update_parent(&req, body.into_inner()).await
}

pub async fn delete_parent(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.delete_parent(&req, id.into_inner()).await
}

pub fn configure_parents_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_parents))
                    .route(web::post().to(create_parent))
                    .route(web::put().to(update_parent)),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_parent)
                            // 详情页只对工作人员开放
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(web::delete().to(delete_parent)),
            ),
    );
}
