use crate::errors::Result;
use crate::models::classes::requests::ClassRequest;
use crate::models::{ActionResult, Viewer};
use crate::services::actions::{Verb, completed, ensure_admin, missing_id, not_found};
use crate::storage::Storage;

const CLASS: &str = "Class";

pub async fn create_class(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ClassRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Create, CLASS)?;
    req.validate()?;

    storage.create_class(&req).await?;
    Ok(completed(Verb::Create, CLASS))
}

pub async fn update_class(
    storage: &dyn Storage,
    viewer: &Viewer,
    req: ClassRequest,
) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Update, CLASS)?;
    let id = req.id.ok_or_else(|| missing_id(CLASS))?;
    req.validate()?;

    storage
        .update_class(id, &req)
        .await?
        .ok_or_else(|| not_found(CLASS))?;
    Ok(completed(Verb::Update, CLASS))
}

pub async fn delete_class(storage: &dyn Storage, viewer: &Viewer, id: i64) -> Result<ActionResult> {
    ensure_admin(viewer, Verb::Delete, CLASS)?;

    // 仍有学生的班级由外键约束拒绝删除
    if !storage.delete_class(id).await? {
        return Err(not_found(CLASS));
    }
    Ok(completed(Verb::Delete, CLASS))
}
