use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::actions::{Verb, completed, ensure_admin, not_found};
use super::{action_response, current_viewer, data_response, storage_from};
use crate::errors::Result;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ActionResult, Viewer};
use crate::storage::Storage;

const GRADE: &str = "Grade";

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        Ok(data_response(
            storage.list_grades().await,
            "Grade list retrieved successfully",
        ))
    }

    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        body: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        Ok(action_response(
            create_grade(storage.as_ref(), &viewer, body).await,
            true,
        ))
    }

    pub async fn delete_grade(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        Ok(action_response(
            delete_grade(storage.as_ref(), &viewer, id).await,
            false,
        ))
    }
}

pub async fn create_grade(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: CreateGradeRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, GRADE)?;
    req.validate()?;

    storage.create_grade(req.level).await?;
    Ok(completed(Verb::Create, GRADE))
}

pub async fn delete_grade(storage: &dyn Storage, viewer: &Viewer, id: i64) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, GRADE)?;

    if !storage.delete_grade(id).await? {
        return Err(not_found(GRADE));
    }
    Ok(completed(Verb::Delete, GRADE))
}
