use crate::errors::Result;
use crate::models::assignments::requests::AssignmentRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const ASSIGNMENT: &str = "Assignment";

pub async fn create_assignment(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AssignmentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, ASSIGNMENT)?;
    req.validate()?;

    storage.create_assignment(&req).await?;
    Ok(completed(Verb::Create, ASSIGNMENT))
}

pub async fn update_assignment(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AssignmentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, ASSIGNMENT)?;
    let id = req.id.ok_or_else(|| missing_id(ASSIGNMENT))?;
    req.validate()?;

    storage
        .update_assignment(id, &req)
        .await?
        .ok_or_else(|| not_found(ASSIGNMENT))?;
    Ok(completed(Verb::Update, ASSIGNMENT))
}

pub async fn delete_assignment(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, ASSIGNMENT)?;

    if !storage.delete_assignment(id).await? {
        return Err(not_found(ASSIGNMENT));
    }
    Ok(completed(Verb::Delete, ASSIGNMENT))
}
