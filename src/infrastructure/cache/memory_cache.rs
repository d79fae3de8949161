use crate::application::ports::cache::ResponseCache;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// In-memory TTL cache. Expired entries are treated as missing and dropped
/// on the next write.
pub struct MemoryCacheService<T: Clone> {
    cache: Arc<RwLock<HashMap<String, CacheEntry<T>>>>,
    default_ttl: Duration,
}

impl<T> MemoryCacheService<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(default_ttl_seconds: u64) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    pub async fn set(&self, key: String, value: T) {
        self.set_with_ttl(key, value, self.default_ttl).await;
    }

    pub async fn set_with_ttl(&self, key: String, value: T, ttl: Duration) {
        let now = Instant::now();
        let entry = CacheEntry {
            data: value,
            expires_at: now + ttl,
        };

        let mut cache = self.cache.write().await;
        cache.retain(|_, entry| entry.expires_at > now);
        cache.insert(key, entry);
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let cache = self.cache.read().await;

        if let Some(entry) = cache.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.data.clone());
            }
        }

        None
    }

    pub async fn delete(&self, key: &str) {
        let mut cache = self.cache.write().await;
        cache.remove(key);
    }

    pub async fn delete_prefix(&self, prefix: &str) {
        let mut cache = self.cache.write().await;
        cache.retain(|key, _| !key.starts_with(prefix));
    }

    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    pub async fn size(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }
}

#[async_trait]
impl<T> ResponseCache<T> for MemoryCacheService<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<T> {
        MemoryCacheService::get(self, key).await
    }

    async fn set(&self, key: String, value: T) {
        MemoryCacheService::set(self, key, value).await
    }

    async fn invalidate(&self, key: &str) {
        self.delete(key).await
    }

    async fn invalidate_prefix(&self, prefix: &str) {
        self.delete_prefix(prefix).await
    }
}
