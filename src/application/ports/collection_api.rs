use crate::application::shared::mappers::Upsertable;
use crate::presentation::dto::ApiListResponse;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Paging and filtering for list endpoints. Unset values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    pub featured: Option<bool>,
}

impl ListQuery {
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|page| *page > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }

    pub fn cache_key(&self, path: &str) -> String {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return path.to_string();
        }
        let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{path}?{}", query.join("&"))
    }
}

#[async_trait]
pub trait CollectionApi<T>: Send + Sync {
    /// Endpoint path, also the cache key prefix.
    fn path(&self) -> &str;

    async fn list(&self, query: &ListQuery) -> Result<ApiListResponse<T>, AppError>;
}

#[async_trait]
pub trait RecordApi<T: Upsertable>: Send + Sync {
    /// Creates a record and returns the server-assigned id.
    async fn create(&self, payload: &T::Payload) -> Result<String, AppError>;

    async fn update(&self, id: &str, payload: &T::Payload) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
