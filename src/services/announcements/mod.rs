pub mod actions;
pub mod list;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{action_response, current_viewer, storage_from};
use crate::models::announcements::requests::AnnouncementRequest;
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn list_announcements(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, request, params).await
    }

    pub async fn create_announcement(
        &self,
        request: &HttpRequest,
        body: AnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::create_announcement(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, true))
    }

    pub async fn update_announcement(
        &self,
        request: &HttpRequest,
        body: AnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::update_announcement(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, false))
    }

    pub async fn delete_announcement(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::delete_announcement(storage.as_ref(), &viewer, id).await;
        Ok(action_response(result, false))
    }
}
