use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::ListQuery;
use crate::services::actions::not_found;
use crate::services::{current_viewer, data_response, list_response};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    params: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let viewer = match current_viewer(request) {
        Ok(viewer) => viewer,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let query = ListQuery::new(viewer, params);
    let result = storage.list_teachers(&query).await;
    Ok(list_response(result, "Teacher list retrieved successfully"))
}

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = storage
        .get_teacher(&id)
        .await
        .and_then(|teacher| teacher.ok_or_else(|| not_found("Teacher")));
    Ok(data_response(result, "Teacher retrieved successfully"))
}
