pub mod actions;
pub mod list;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{action_response, current_viewer, storage_from};
use crate::models::events::requests::EventRequest;
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn list_events(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, request, params).await
    }

    pub async fn create_event(
        &self,
        request: &HttpRequest,
        body: EventRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::create_event(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, true))
    }

    pub async fn update_event(
        &self,
        request: &HttpRequest,
        body: EventRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::update_event(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, false))
    }

    pub async fn delete_event(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::delete_event(storage.as_ref(), &viewer, id).await;
        Ok(action_response(result, false))
    }
}
