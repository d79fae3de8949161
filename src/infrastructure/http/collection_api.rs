use super::api_client::ApiClient;
use crate::application::ports::collection_api::{CollectionApi, ListQuery, RecordApi};
use crate::application::shared::mappers::Upsertable;
use crate::presentation::dto::{extract_created_id, ApiListResponse};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// List endpoint, and for admin resources the create/update/delete routes
/// below it.
pub struct HttpCollectionApi<T> {
    client: Arc<ApiClient>,
    path: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpCollectionApi<T> {
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            _record: PhantomData,
        }
    }

    fn record_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}

impl<T: Upsertable> HttpCollectionApi<T> {
    /// `/admin/<resource>`.
    pub fn admin_resource(client: Arc<ApiClient>) -> Self {
        Self::new(client, format!("/admin/{}", T::RESOURCE))
    }
}

#[async_trait]
impl<T> CollectionApi<T> for HttpCollectionApi<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    fn path(&self) -> &str {
        &self.path
    }

    async fn list(&self, query: &ListQuery) -> Result<ApiListResponse<T>, AppError> {
        let body = self.client.get(&self.path, &query.to_pairs()).await?;
        // Some endpoints answer with a bare array.
        let body = match body {
            Value::Array(items) => serde_json::json!({ "data": items }),
            other => other,
        };
        serde_json::from_value(body).map_err(|err| AppError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl<T> RecordApi<T> for HttpCollectionApi<T>
where
    T: Upsertable + DeserializeOwned,
{
    async fn create(&self, payload: &T::Payload) -> Result<String, AppError> {
        let body = self.client.post(&self.path, payload).await?;
        extract_created_id(&body).ok_or_else(|| {
            AppError::InvalidResponse(format!("create on {} returned no id", self.path))
        })
    }

    async fn update(&self, id: &str, payload: &T::Payload) -> Result<(), AppError> {
        self.client.put(&self.record_path(id), payload).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&self.record_path(id)).await?;
        Ok(())
    }
}
