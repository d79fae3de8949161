use async_trait::async_trait;

/// Read-through cache for fetched collections, keyed by request path and query.
#[async_trait]
pub trait ResponseCache<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<T>;

    async fn set(&self, key: String, value: T);

    async fn invalidate(&self, key: &str);

    /// Drops every entry whose key starts with `prefix`.
    async fn invalidate_prefix(&self, prefix: &str);
}
