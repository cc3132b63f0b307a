//! 考试写操作：管理员可操作全部考试，教师只能操作自己任课课程的考试

use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::entities::UserRole;
use crate::models::exams::requests::ExamRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, missing_id, not_authorized, not_found};
use crate::storage::Storage;

const EXAM: &str = "Exam";

fn ensure_staff(viewer: &Viewer, verb: Verb) -> Result<()> {
    match viewer.role {
        UserRole::Admin | UserRole::Teacher => Ok(()),
        _ => Err(not_authorized(verb, EXAM)),
    }
}

async fn ensure_lesson_access(
    storage: &dyn Storage,
    viewer: &Viewer,
    verb: Verb,
    lesson_id: i64,
) -> Result<()> {
    if viewer.is_admin() {
        return Ok(());
    }
    if viewer.role == UserRole::Teacher
        && storage.lesson_taught_by(lesson_id, &viewer.user_id).await?
    {
        return Ok(());
    }
    Err(SchoolAdminError::authorization(format!(
        "You are not authorized to {} an exam for this lesson.",
        verb.as_str()
    )))
}

pub async fn create_exam(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ExamRequest,
) -> Result<ActionResult> {
    ensure_staff(viewer, Verb::Create)?;
    req.validate()?;
    ensure_lesson_access(storage, viewer, Verb::Create, req.lesson_id).await?;

    storage.create_exam(&req).await?;
    Ok(completed(Verb::Create, EXAM))
}

pub async fn update_exam(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ExamRequest,
) -> Result<ActionResult> {
    ensure_staff(viewer, Verb::Update)?;
    let id = req.id.ok_or_else(|| missing_id(EXAM))?;
    req.validate()?;

    let existing = storage.get_exam(id).await?.ok_or_else(|| not_found(EXAM))?;
    // 原课程和目标课程都必须是自己的
    ensure_lesson_access(storage, viewer, Verb::Update, existing.lesson_id).await?;
    if existing.lesson_id != req.lesson_id {
        ensure_lesson_access(storage, viewer, Verb::Update, req.lesson_id).await?;
    }

    storage
        .update_exam(id, &req)
        .await?
        .ok_or_else(|| not_found(EXAM))?;
    Ok(completed(Verb::Update, EXAM))
}

pub async fn delete_exam(storage: &dyn Storage, viewer: &Viewer, id: i64) -> Result<ActionResult> {
    ensure_staff(viewer, Verb::Delete)?;

    let existing = storage.get_exam(id).await?.ok_or_else(|| not_found(EXAM))?;
    ensure_lesson_access(storage, viewer, Verb::Delete, existing.lesson_id).await?;

    if !storage.delete_exam(id).await? {
        return Err(not_found(EXAM));
    }
    Ok(completed(Verb::Delete, EXAM))
}
