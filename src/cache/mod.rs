//! 会话缓存
//!
//! 以字符串形式缓存序列化后的对象，目前只有基于 Moka 的进程内实现。

pub mod moka;

use async_trait::async_trait;

pub use self::moka::MokaObjectCache;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
}

/// 会话缓存键
pub fn session_key(account_id: &str) -> String {
    format!("session:{account_id}")
}
