use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::ListQuery;
use crate::services::{current_viewer, list_response};

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    params: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let viewer = match current_viewer(request) {
        Ok(viewer) => viewer,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let query = ListQuery::new(viewer, params);
    let result = storage.list_announcements(&query).await;
    Ok(list_response(result, "Announcement list retrieved successfully"))
}
