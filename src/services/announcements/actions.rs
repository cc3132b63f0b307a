use crate::errors::Result;
use crate::models::announcements::requests::AnnouncementRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const ANNOUNCEMENT: &str = "Announcement";

pub async fn create_announcement(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AnnouncementRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, ANNOUNCEMENT)?;
    req.validate()?;

    storage.create_announcement(&req).await?;
    Ok(completed(Verb::Create, ANNOUNCEMENT))
}

pub async fn update_announcement(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AnnouncementRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, ANNOUNCEMENT)?;
    let id = req.id.ok_or_else(|| missing_id(ANNOUNCEMENT))?;
    req.validate()?;

    storage
        .update_announcement(id, &req)
        .await?
        .ok_or_else(|| not_found(ANNOUNCEMENT))?;
    Ok(completed(Verb::Update, ANNOUNCEMENT))
}

pub async fn delete_announcement(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, ANNOUNCEMENT)?;

    if !storage.delete_announcement(id).await? {
        return Err(not_found(ANNOUNCEMENT));
    }
    Ok(completed(Verb::Delete, ANNOUNCEMENT))
}
