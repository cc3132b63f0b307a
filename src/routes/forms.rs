use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::services::FormService;

static FORM_SERVICE: Lazy<FormService> = Lazy::new(FormService::new_lazy);

pub async fn related_data(req: HttpRequest, table: web::Path<String>) -> ActixResult<HttpResponse> {
    FORM_SERVICE.related_data(&req, table.into_inner()).await
}

pub fn configure_forms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forms")
            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{table}", web::get().to(related_data)),
    );
}
