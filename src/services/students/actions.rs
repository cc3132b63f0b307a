use tracing::info;

use crate::errors::{Result, SchoolAdminError};
use crate::identity::IdentityProvider;
use crate::models::auth::entities::UserRole;
use crate::models::students::requests::StudentRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::services::people;
use crate::storage::Storage;

const STUDENT: &str = "Student";

/// 班级人数已满时拒绝加入
async fn ensure_capacity(storage: &dyn Storage, class_id: i64) -> Result<()> {
    let class = storage
        .get_class(class_id)
        .await?
        .ok_or_else(|| not_found("Class"))?;
    let enrolled = storage.count_students_in_class(class_id).await?;

    if enrolled >= u64::try_from(class.capacity).unwrap_or(0) {
        return Err(SchoolAdminError::capacity("Class capacity is full"));
    }
    Ok(())
}

pub async fn create_student(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: StudentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, STUDENT)?;
    req.validate(true)?;
    ensure_capacity(storage, req.class_id).await?;

    let account = identity
        .create_account(people::new_account(&req.account, UserRole::Student)?)
        .await?;
    let outcome = storage.create_student(&account.id, &req).await;
    if outcome.is_ok() {
        info!("Student {} enrolled in class {}", account.id, req.class_id);
    }
    people::settle_create(identity, &account.id, outcome, STUDENT).await
}

pub async fn update_student(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: StudentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, STUDENT)?;
    let id = req
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing_id(STUDENT))?;
    req.validate(false)?;

    let existing = storage
        .get_student(&id)
        .await?
        .ok_or_else(|| not_found(STUDENT))?;
    // 转班时新班级也要有空位
    if existing.class_id != req.class_id {
        ensure_capacity(storage, req.class_id).await?;
    }

    let previous = people::update_account(identity, &id, &req.account).await?;
    let outcome = storage.update_student(&id, &req).await;
    people::settle_update(identity, previous, outcome, STUDENT).await
}

pub async fn delete_student(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    id: &str,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, STUDENT)?;

    if !storage.delete_student(id).await? {
        return Err(not_found(STUDENT));
    }
    people::remove_account(identity, id).await?;

    info!("Student {} deleted", id);
    Ok(completed(Verb::Delete, STUDENT))
}
