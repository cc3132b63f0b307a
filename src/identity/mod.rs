//! 身份提供方
//!
//! 账号（用户名、密码、姓名、角色）由身份提供方管理，
//! 业务表只保存账号 id。
//! 不带 `user_` 前缀的 id 是直接写入业务表的记录，没有对应账号。

pub mod local;

pub use local::LocalIdentityProvider;

use crate::errors::Result;
use crate::models::auth::entities::{Account, UserRole};

pub const ACCOUNT_ID_PREFIX: &str = "user";

/// id 是否对应身份提供方中的账号
pub fn is_provider_account(id: &str) -> bool {
    id.split('_').next() == Some(ACCOUNT_ID_PREFIX) && id.contains('_')
}

/// 新建账号
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: UserRole,
}

/// 账号变更，密码为空表示不修改
#[derive(Debug, Clone)]
pub struct AccountChanges {
    pub username: String,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<&Account> for AccountChanges {
    /// 用于把账号恢复到更新前的状态
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            password: None,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        }
    }
}

#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, account: NewAccount) -> Result<Account>;
    async fn update_account(&self, id: &str, changes: AccountChanges) -> Result<Account>;
    async fn delete_account(&self, id: &str) -> Result<()>;
    async fn get_account(&self, id: &str) -> Result<Option<Account>>;
    /// 用户名密码校验，成功时记录登录时间
    async fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<Account>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_account_prefix() {
        assert!(is_provider_account("user_2a9f0c"));
        assert!(!is_provider_account("teacher1"));
        assert!(!is_provider_account("user"));
        assert!(!is_provider_account("username_1"));
    }
}
