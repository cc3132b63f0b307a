use crate::errors::Result;
use crate::models::events::requests::EventRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const EVENT: &str = "Event";

pub async fn create_event(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: EventRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, EVENT)?;
    req.validate()?;

    storage.create_event(&req).await?;
    Ok(completed(Verb::Create, EVENT))
}

pub async fn update_event(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: EventRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, EVENT)?;
    let id = req.id.ok_or_else(|| missing_id(EVENT))?;
    req.validate()?;

    storage
        .update_event(id, &req)
        .await?
        .ok_or_else(|| not_found(EVENT))?;
    Ok(completed(Verb::Update, EVENT))
}

pub async fn delete_event(storage: &dyn Storage, viewer: &Viewer, id: i64) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, EVENT)?;

    if !storage.delete_event(id).await? {
        return Err(not_found(EVENT));
    }
    Ok(completed(Verb::Delete, EVENT))
}
