use tracing::info;

use crate::errors::Result;
use crate::identity::IdentityProvider;
use crate::models::auth::entities::UserRole;
use crate::models::teachers::requests::TeacherRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::services::people;
use crate::storage::Storage;

const TEACHER: &str = "Teacher";

pub async fn create_teacher(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: TeacherRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, TEACHER)?;
    req.validate(true)?;

    let account = identity
        .create_account(people::new_account(&req.account, UserRole::Teacher)?)
        .await?;
    let outcome = storage.create_teacher(&account.id, &req).await;
    if outcome.is_ok() {
        info!("Teacher {} created", account.id);
    }
    people::settle_create(identity, &account.id, outcome, TEACHER).await
}

pub async fn update_teacher(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: TeacherRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, TEACHER)?;
    let id = req
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing_id(TEACHER))?;
    req.validate(false)?;

    if storage.get_teacher(&id).await?.is_none() {
        return Err(not_found(TEACHER));
    }

    let previous = people::update_account(identity, &id, &req.account).await?;
    let outcome = storage.update_teacher(&id, &req).await;
    people::settle_update(identity, previous, outcome, TEACHER).await
}

pub async fn delete_teacher(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    id: &str,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, TEACHER)?;

    if !storage.delete_teacher(id).await? {
        return Err(not_found(TEACHER));
    }
    people::remove_account(identity, id).await?;

    info!("Teacher {} deleted", id);
    Ok(completed(Verb::Delete, TEACHER))
}
