use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::EventRequest;
use crate::services::EventService;

static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn list_events(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(&req, query.into_inner()).await
}

pub async fn create_event(
    req: HttpRequest,
    body: web::Json<EventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create_event(&req, body.into_inner()).await
}

pub async fn update_event(
    req: HttpRequest,
    body: web::Json<EventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.update_event(&req, body.into_inner()).await
}

pub async fn delete_event(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(&req, id.into_inner()).await
}

pub fn configure_events_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_events))
                    .route(web::post().to(create_event))
                    .route(web::put().to(update_event)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_event))),
    );
}
