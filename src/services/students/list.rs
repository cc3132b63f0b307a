use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ListQuery;
use crate::services::actions::not_found;
use crate::services::{current_viewer, data_response, list_response};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let viewer = match current_viewer(request) {
        Ok(viewer) => viewer,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let query = ListQuery::new(viewer, params);
    let result = storage.list_students(&query).await;
    Ok(list_response(result, "Student list retrieved successfully"))
}

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = storage
        .get_student(&id)
        .await
        .and_then(|student| student.ok_or_else(|| not_found("Student")));
    Ok(data_response(result, "Student retrieved successfully"))
}
