//! 教师、学生、家长的账号同步
//!
//! 这三类记录同时存在于业务库和身份提供方。
//! 创建时先建账号，写库失败再删掉；
//! 更新时先改账号，写库失败恢复旧值（密码无法恢复）；
//! 删除时先删行再删账号。

use tracing::{error, warn};

use super::actions::{Verb, completed, not_found};
use crate::errors::{Result, SchoolAdminError};
use crate::identity::{AccountChanges, IdentityProvider, NewAccount, is_provider_account};
use crate::models::ActionResult;
use crate::models::auth::entities::{Account, UserRole};
use crate::models::people::AccountFields;

pub(crate) fn new_account(fields: &AccountFields, role: UserRole) -> Result<NewAccount> {
    let password = fields.password().ok_or_else(|| {
        SchoolAdminError::validation("Password must be at least 8 characters long!")
    })?;

    Ok(NewAccount {
        username: fields.username.trim().to_string(),
        password: password.to_string(),
        first_name: fields.name.clone(),
        last_name: fields.surname.clone(),
        email: fields.email(),
        role,
    })
}

fn account_changes(fields: &AccountFields) -> AccountChanges {
    AccountChanges {
        username: fields.username.trim().to_string(),
        password: fields.password().map(str::to_string),
        first_name: Some(fields.name.clone()),
        last_name: Some(fields.surname.clone()),
    }
}

/// 写库结果出来后收尾：失败时删掉刚建的账号
pub(crate) async fn settle_create<T>(
    identity: &dyn IdentityProvider,
    account_id: &str,
    outcome: Result<T>,
    entity: &str,
) -> Result<ActionResult> {
    match outcome {
        Ok(_) => Ok(completed(Verb::Create, entity)),
        Err(err) => {
            if let Err(cleanup) = identity.delete_account(account_id).await {
                error!(
                    "Failed to remove account {} after {} insert failed: {}",
                    account_id, entity, cleanup
                );
            }
            Err(err)
        }
    }
}

/// 先更新身份提供方中的账号，返回旧账号供回滚
pub(crate) async fn update_account(
    identity: &dyn IdentityProvider,
    id: &str,
    fields: &AccountFields,
) -> Result<Option<Account>> {
    if !is_provider_account(id) {
        return Ok(None);
    }
    let previous = identity.get_account(id).await?;
    identity.update_account(id, account_changes(fields)).await?;
    Ok(previous)
}

async fn restore_account(identity: &dyn IdentityProvider, previous: Option<Account>) {
    if let Some(account) = previous {
        if let Err(err) = identity
            .update_account(&account.id, AccountChanges::from(&account))
            .await
        {
            error!("Failed to restore account {}: {}", account.id, err);
        }
    }
}

pub(crate) async fn settle_update<T>(
    identity: &dyn IdentityProvider,
    previous: Option<Account>,
    outcome: Result<Option<T>>,
    entity: &str,
) -> Result<ActionResult> {
    match outcome {
        Ok(Some(_)) => Ok(completed(Verb::Update, entity)),
        Ok(None) => {
            restore_account(identity, previous).await;
            Err(not_found(entity))
        }
        Err(err) => {
            restore_account(identity, previous).await;
            Err(err)
        }
    }
}

/// 业务行删除后删除账号；此时失败只能记录并上报
pub(crate) async fn remove_account(identity: &dyn IdentityProvider, id: &str) -> Result<()> {
    if !is_provider_account(id) {
        return Ok(());
    }
    identity.delete_account(id).await.map_err(|err| {
        warn!("Row {} deleted but its account could not be removed: {}", id, err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(password: Option<&str>) -> AccountFields {
        AccountFields {
            username: " teacher01 ".to_string(),
            password: password.map(str::to_string),
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            email: Some(String::new()),
        }
    }

    #[test]
    fn test_new_account_requires_password() {
        assert!(new_account(&fields(None), UserRole::Teacher).is_err());

        let account = new_account(&fields(Some("correct-horse")), UserRole::Teacher).unwrap();
        assert_eq!(account.username, "teacher01");
        assert_eq!(account.email, None);
        assert_eq!(account.role, UserRole::Teacher);
    }

    #[test]
    fn test_account_changes_skips_empty_password() {
        let changes = account_changes(&fields(Some("")));
        assert_eq!(changes.password, None);
        assert_eq!(changes.first_name.as_deref(), Some("Ada"));
    }
}
