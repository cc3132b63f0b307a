use crate::errors::Result;
use crate::models::results::requests::ResultRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const RESULT: &str = "Result";

pub async fn create_result(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ResultRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, RESULT)?;
    req.validate()?;

    storage.create_result(&req).await?;
    Ok(completed(Verb::Create, RESULT))
}

pub async fn update_result(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ResultRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, RESULT)?;
    let id = req.id.ok_or_else(|| missing_id(RESULT))?;
    req.validate()?;

    storage
        .update_result(id, &req)
        .await?
        .ok_or_else(|| not_found(RESULT))?;
    Ok(completed(Verb::Update, RESULT))
}

pub async fn delete_result(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, RESULT)?;

    if !storage.delete_result(id).await? {
        return Err(not_found(RESULT));
    }
    Ok(completed(Verb::Delete, RESULT))
}
