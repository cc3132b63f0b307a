use crate::errors::Result;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const SUBJECT: &str = "Subject";

pub async fn create_subject(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: SubjectRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, SUBJECT)?;
    req.validate()?;

    storage.create_subject(&req).await?;
    Ok(completed(Verb::Create, SUBJECT))
}

pub async fn update_subject(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: SubjectRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, SUBJECT)?;
    let id = req.id.ok_or_else(|| missing_id(SUBJECT))?;
    req.validate()?;

    storage
        .update_subject(id, &req)
        .await?
        .ok_or_else(|| not_found(SUBJECT))?;
    Ok(completed(Verb::Update, SUBJECT))
}

pub async fn delete_subject(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, SUBJECT)?;

    if !storage.delete_subject(id).await? {
        return Err(not_found(SUBJECT));
    }
    Ok(completed(Verb::Delete, SUBJECT))
}
