use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::AnnouncementRequest;
use crate::services::AnnouncementService;

static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.list_announcements(&req, query.into_inner()).await
}

pub async fn create_announcement(
    req: HttpRequest,
    body: web::Json<AnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.create_announcement(&req, body.into_inner()).await
}

pub async fn update_announcement(
    req: HttpRequest,
    body: web::Json<AnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.update_announcement(&req, body.into_inner()).await
}

pub async fn delete_announcement(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.delete_announcement(&req, id.into_inner()).await
}

pub fn configure_announcements_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement))
                    .route(web::put().to(update_announcement)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_announcement))),
    );
}
