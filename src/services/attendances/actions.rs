use crate::errors::Result;
use crate::models::attendances::requests::AttendanceRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const ATTENDANCE: &str = "Attendance";

pub async fn create_attendance(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AttendanceRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, ATTENDANCE)?;
    req.validate()?;

    storage.create_attendance(&req).await?;
    Ok(completed(Verb::Create, ATTENDANCE))
}

pub async fn update_attendance(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: AttendanceRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, ATTENDANCE)?;
    let id = req.id.ok_or_else(|| missing_id(ATTENDANCE))?;
    req.validate()?;

    storage
        .update_attendance(id, &req)
        .await?
        .ok_or_else(|| not_found(ATTENDANCE))?;
    Ok(completed(Verb::Update, ATTENDANCE))
}

pub async fn delete_attendance(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, ATTENDANCE)?;

    if !storage.delete_attendance(id).await? {
        return Err(not_found(ATTENDANCE));
    }
    Ok(completed(Verb::Delete, ATTENDANCE))
}
