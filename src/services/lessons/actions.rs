use crate::errors::Result;
use crate::models::lessons::requests::LessonRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const LESSON: &str = "Lesson";

pub async fn create_lesson(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: LessonRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, LESSON)?;
    req.validate()?;

    storage.create_lesson(&req).await?;
    Ok(completed(Verb::Create, LESSON))
}

pub async fn update_lesson(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: LessonRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, LESSON)?;
    let id = req.id.ok_or_else(|| missing_id(LESSON))?;
    req.validate()?;

    storage
        .update_lesson(id, &req)
        .await?
        .ok_or_else(|| not_found(LESSON))?;
    Ok(completed(Verb::Update, LESSON))
}

pub async fn delete_lesson(
    storage: &dyn Storage,
    viewer: &Viewer,
    id: i64,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, LESSON)?;

    // 考试、作业和考勤随课程级联删除
    if !storage.delete_lesson(id).await? {
        return Err(not_found(LESSON));
    }
    Ok(completed(Verb::Delete, LESSON))
}
