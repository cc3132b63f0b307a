use crate::cache::{MokaObjectCache, ObjectCache};
use crate::config::AppConfig;
use crate::identity::{IdentityProvider, LocalIdentityProvider, NewAccount};
use crate::models::auth::entities::UserRole;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub identity: Arc<dyn IdentityProvider>,
    pub cache: Arc<dyn ObjectCache>,
}

const ADMIN_USERNAME: &str = "admin";

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 没有任何管理员时创建默认管理员
pub async fn seed_admin(storage: &dyn Storage, identity: &dyn IdentityProvider) {
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} admin(s), skipping admin seed", count);
            return;
        }
        Ok(_) => info!("No admin found, creating default admin account..."),
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    // 优先使用环境变量中的密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let account = match identity
        .create_account(NewAccount {
            username: ADMIN_USERNAME.to_string(),
            password,
            first_name: "Administrator".to_string(),
            last_name: String::new(),
            email: None,
            role: UserRole::Admin,
        })
        .await
    {
        Ok(account) => account,
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
            return;
        }
    };

    match storage.create_admin(&account.id, &account.username).await {
        Ok(()) => info!(
            "Default admin account created successfully (ID: {}, username: {})",
            account.id, account.username
        ),
        Err(e) => {
            warn!("Failed to create admin row: {}", e);
            if let Err(e) = identity.delete_account(&account.id).await {
                warn!("Failed to remove orphaned admin account: {}", e);
            }
        }
    }
}

/// 准备服务器启动所需的存储、身份提供方和缓存
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let sea_orm = SeaOrmStorage::new_async()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let identity: Arc<dyn IdentityProvider> = Arc::new(LocalIdentityProvider::new(
        sea_orm.connection(),
        config.argon2.clone(),
    ));
    let storage: Arc<dyn Storage> = Arc::new(sea_orm);

    seed_admin(storage.as_ref(), identity.as_ref()).await;

    let cache: Arc<dyn ObjectCache> = Arc::new(MokaObjectCache::new(&config.cache));
    warn!("Session cache initialized");

    StartupContext {
        storage,
        identity,
        cache,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
