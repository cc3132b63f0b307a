pub mod actions;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{action_response, current_viewer, storage_from};
use crate::models::attendances::requests::AttendanceRequest;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn create_attendance(
        &self,
        request: &HttpRequest,
        body: AttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::create_attendance(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, true))
    }

    pub async fn update_attendance(
        &self,
        request: &HttpRequest,
        body: AttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::update_attendance(storage.as_ref(), &viewer, body).await;
        Ok(action_response(result, false))
    }

    pub async fn delete_attendance(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = actions::delete_attendance(storage.as_ref(), &viewer, id).await;
        Ok(action_response(result, false))
    }
}
