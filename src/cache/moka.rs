use std::time::Duration;

use async_trait::async_trait;
use ::moka::future::Cache;
use tracing::debug;

use super::{CacheResult, ObjectCache};
use crate::config::CacheConfig;

pub struct MokaObjectCache {
    inner: Cache<String, String>,
}

impl MokaObjectCache {
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.default_ttl))
            .build();

        debug!(
            "MokaObjectCache initialized with max capacity: {}, ttl: {}s",
            config.max_capacity, config.default_ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaObjectCache::new(&CacheConfig::default());
        cache
            .insert_raw("session:user_1".to_string(), "{}".to_string())
            .await;
        assert_eq!(
            cache.get_raw("session:user_1").await,
            CacheResult::Found("{}".to_string())
        );

        cache.remove("session:user_1").await;
        assert_eq!(cache.get_raw("session:user_1").await, CacheResult::NotFound);
    }
}
