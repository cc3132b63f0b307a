pub mod actions;
pub mod list;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{action_response, current_viewer, forget_session, identity_from, storage_from};
use crate::identity::IdentityProvider;
use crate::models::parents::requests::ParentRequest;
use crate::storage::Storage;

pub struct ParentService {
    storage: Option<Arc<dyn Storage>>,
    identity: Option<Arc<dyn IdentityProvider>>,
}

impl ParentService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            identity: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub(crate) fn get_identity(&self, request: &HttpRequest) -> Arc<dyn IdentityProvider> {
        match &self.identity {
            Some(identity) => identity.clone(),
            None => identity_from(request),
        }
    }

    pub async fn list_parents(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        list::list_parents(self, request, params).await
    }

    pub async fn get_parent(&self, request: &HttpRequest, id: String) -> ActixResult<HttpResponse> {
        list::get_parent(self, request, id).await
    }

    pub async fn create_parent(
        &self,
        request: &HttpRequest,
        body: ParentRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);
        let identity = self.get_identity(request);

        let result =
            actions::create_parent(storage.as_ref(), identity.as_ref(), &viewer, body).await;
        Ok(action_response(result, true))
    }

    pub async fn update_parent(
        &self,
        request: &HttpRequest,
        body: ParentRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);
        let identity = self.get_identity(request);
        let id = body.id.clone();

        let result =
            actions::update_parent(storage.as_ref(), identity.as_ref(), &viewer, body).await;
        if let (Ok(_), Some(id)) = (&result, id) {
            forget_session(request, &id).await;
        }
        Ok(action_response(result, false))
    }

    pub async fn delete_parent(
        &self,
        request: &HttpRequest,
        id: String,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);
        let identity = self.get_identity(request);

        let result =
            actions::delete_parent(storage.as_ref(), identity.as_ref(), &viewer, &id).await;
        if result.is_ok() {
            forget_session(request, &id).await;
        }
        Ok(action_response(result, false))
    }
}
