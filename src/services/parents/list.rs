use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::ListQuery;
use crate::services::actions::not_found;
use crate::services::{current_viewer, data_response, list_response};

pub async fn list_parents(
    service: &ParentService,
    request: &HttpRequest,
    params: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let viewer = match current_viewer(request) {
        Ok(viewer) => viewer,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let query = ListQuery::new(viewer, params);
    let result = storage.list_parents(&query).await;
    Ok(list_response(result, "Parent list retrieved successfully"))
}

pub async fn get_parent(
    service: &ParentService,
    request: &HttpRequest,
    id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = storage
        .get_parent(&id)
        .await
        .and_then(|parent| parent.ok_or_else(|| not_found("Parent")));
    Ok(data_response(result, "Parent retrieved successfully"))
}
