//! 基于本地 accounts 表的身份提供方

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, info};

use super::{ACCOUNT_ID_PREFIX, AccountChanges, IdentityProvider, NewAccount};
use crate::config::Argon2Config;
use crate::entity::accounts::{ActiveModel, Column, Entity as Accounts};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::entities::Account;
use crate::utils::password::{hash_password, verify_password};

#[derive(Clone)]
pub struct LocalIdentityProvider {
    db: DatabaseConnection,
    argon2: Argon2Config,
}

impl LocalIdentityProvider {
    pub fn new(db: DatabaseConnection, argon2: Argon2Config) -> Self {
        Self { db, argon2 }
    }

    fn new_account_id() -> String {
        format!("{ACCOUNT_ID_PREFIX}_{}", uuid::Uuid::new_v4().simple())
    }
}

/// 账号表上的唯一键冲突仍归为重复条目，其余错误归为身份提供方错误
fn provider_err(context: &'static str) -> impl FnOnce(sea_orm::DbErr) -> SchoolAdminError {
    move |err| match SchoolAdminError::from_db(context, err) {
        duplicate @ SchoolAdminError::DuplicateEntry(_) => duplicate,
        other => SchoolAdminError::identity_provider(other.message()),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait::async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn create_account(&self, account: NewAccount) -> Result<Account> {
        let now = chrono::Utc::now().timestamp();
        let password_hash = hash_password(&account.password, &self.argon2)?;

        let model = ActiveModel {
            id: Set(Self::new_account_id()),
            username: Set(account.username.trim().to_string()),
            email: Set(account.email),
            password_hash: Set(password_hash),
            first_name: Set(non_empty(account.first_name)),
            last_name: Set(non_empty(account.last_name)),
            role: Set(account.role.to_string()),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(provider_err("创建账号失败"))?;

        info!("账号已创建: {} ({})", model.username, model.role);
        model.into_account()
    }

    async fn update_account(&self, id: &str, changes: AccountChanges) -> Result<Account> {
        let existing = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(provider_err("查询账号失败"))?
            .ok_or_else(|| SchoolAdminError::identity_provider("Account not found"))?;

        let mut model: ActiveModel = existing.into();
        model.username = Set(changes.username.trim().to_string());
        model.first_name = Set(changes.first_name.and_then(non_empty));
        model.last_name = Set(changes.last_name.and_then(non_empty));
        if let Some(password) = changes.password.filter(|p| !p.is_empty()) {
            model.password_hash = Set(hash_password(&password, &self.argon2)?);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(provider_err("更新账号失败"))?;

        debug!("账号已更新: {}", updated.id);
        updated.into_account()
    }

    async fn delete_account(&self, id: &str) -> Result<()> {
        let result = Accounts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(provider_err("删除账号失败"))?;

        if result.rows_affected == 0 {
            return Err(SchoolAdminError::identity_provider("Account not found"));
        }
        debug!("账号已删除: {}", id);
        Ok(())
    }

    async fn get_account(&self, id: &str) -> Result<Option<Account>> {
        Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(provider_err("查询账号失败"))?
            .map(|m| m.into_account())
            .transpose()
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let Some(model) = Accounts::find()
            .filter(Column::Username.eq(username.trim()))
            .one(&self.db)
            .await
            .map_err(provider_err("查询账号失败"))?
        else {
            return Ok(None);
        };

        if !verify_password(password, &model.password_hash) {
            return Ok(None);
        }

        let mut active: ActiveModel = model.into();
        active.last_login = Set(Some(chrono::Utc::now().timestamp()));
        let updated = active
            .update(&self.db)
            .await
            .map_err(provider_err("更新登录时间失败"))?;

        updated.into_account().map(Some)
    }
}
