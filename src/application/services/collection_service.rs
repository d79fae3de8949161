use crate::application::ports::cache::ResponseCache;
use crate::application::ports::collection_api::{CollectionApi, ListQuery};
use crate::presentation::dto::ApiListResponse;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Cached view of one list endpoint. Reads go through the cache; `revalidate`
/// always hits the API and refreshes the cached page.
pub struct CollectionService<T> {
    api: Arc<dyn CollectionApi<T>>,
    cache: Arc<dyn ResponseCache<ApiListResponse<T>>>,
    query: ListQuery,
}

impl<T> CollectionService<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        api: Arc<dyn CollectionApi<T>>,
        cache: Arc<dyn ResponseCache<ApiListResponse<T>>>,
        query: ListQuery,
    ) -> Self {
        Self { api, cache, query }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn path(&self) -> &str {
        self.api.path()
    }

    pub async fn fetch(&self) -> Result<ApiListResponse<T>, AppError> {
        self.fetch_with(&self.query).await
    }

    pub async fn fetch_with(&self, query: &ListQuery) -> Result<ApiListResponse<T>, AppError> {
        let key = query.cache_key(self.api.path());
        if let Some(page) = self.cache.get(&key).await {
            debug!(key = %key, "collection cache hit");
            return Ok(page);
        }
        self.load(key, query).await
    }

    pub async fn revalidate(&self) -> Result<ApiListResponse<T>, AppError> {
        self.revalidate_with(&self.query).await
    }

    pub async fn revalidate_with(
        &self,
        query: &ListQuery,
    ) -> Result<ApiListResponse<T>, AppError> {
        self.load(query.cache_key(self.api.path()), query).await
    }

    /// Drops every cached page of this endpoint, whatever its query.
    pub async fn invalidate(&self) {
        self.cache.invalidate_prefix(self.api.path()).await;
    }

    async fn load(&self, key: String, query: &ListQuery) -> Result<ApiListResponse<T>, AppError> {
        let page = self.api.list(query).await?;
        debug!(key = %key, count = page.data.len(), "collection fetched");
        self.cache.set(key, page.clone()).await;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Tag;
    use crate::infrastructure::cache::MemoryCacheService;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingApi {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CollectionApi<Tag> for CountingApi {
        fn path(&self) -> &str {
            "/admin/tags"
        }

        async fn list(&self, _query: &ListQuery) -> Result<ApiListResponse<Tag>, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ApiListResponse::new(vec![Tag::new(
                format!("t{call}"),
                "Rust",
                "language",
            )]))
        }
    }

    fn service(api: Arc<CountingApi>) -> CollectionService<Tag> {
        CollectionService::new(
            api,
            Arc::new(MemoryCacheService::<ApiListResponse<Tag>>::new(60)),
            ListQuery::paged(1, 100),
        )
    }

    #[tokio::test]
    async fn fetch_reads_through_the_cache() {
        let api = Arc::new(CountingApi { calls: AtomicUsize::new(0) });
        let service = service(api.clone());

        let first = service.fetch().await.unwrap();
        let second = service.fetch().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn revalidate_bypasses_and_refreshes() {
        let api = Arc::new(CountingApi { calls: AtomicUsize::new(0) });
        let service = service(api.clone());

        service.fetch().await.unwrap();
        let fresh = service.revalidate().await.unwrap();
        assert_eq!(fresh.data[0].id, "t1");
        assert_eq!(service.fetch().await.unwrap().data[0].id, "t1");
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_the_next_fetch() {
        let api = Arc::new(CountingApi { calls: AtomicUsize::new(0) });
        let service = service(api.clone());

        service.fetch().await.unwrap();
        service.invalidate().await;
        service.fetch().await.unwrap();
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }
}
