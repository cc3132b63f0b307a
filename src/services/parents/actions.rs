use tracing::info;

use crate::errors::Result;
use crate::identity::IdentityProvider;
use crate::models::auth::entities::UserRole;
use crate::models::parents::requests::ParentRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::services::people;
use crate::storage::Storage;

const PARENT: &str = "Parent";

pub async fn create_parent(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: ParentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, PARENT)?;
    req.validate(true)?;

    let account = identity
        .create_account(people::new_account(&req.account, UserRole::Parent)?)
        .await?;
    let outcome = storage.create_parent(&account.id, &req).await;
    people::settle_create(identity, &account.id, outcome, PARENT).await
}

pub async fn update_parent(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    req: ParentRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, PARENT)?;
    let id = req
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing_id(PARENT))?;
    req.validate(false)?;

    if storage.get_parent(&id).await?.is_none() {
        return Err(not_found(PARENT));
    }

    let previous = people::update_account(identity, &id, &req.account).await?;
    let outcome = storage.update_parent(&id, &req).await;
    people::settle_update(identity, previous, outcome, PARENT).await
}

pub async fn delete_parent(
    storage: &dyn Storage,
    identity: &dyn IdentityProvider,
    viewer: &Viewer,
    id: &str,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, PARENT)?;

    // 还有孩子关联时由外键约束拒绝
    if !storage.delete_parent(id).await? {
        return Err(not_found(PARENT));
    }
    people::remove_account(identity, id).await?;

    info!("Parent {} deleted", id);
    Ok(completed(Verb::Delete, PARENT))
}
