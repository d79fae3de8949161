use super::error_mapping::{error_from_response, notification_for_error};
use crate::application::ports::notifier::{Notification, NotificationVariant, Notifier};
use crate::application::ports::token_store::TokenStore;
use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Public,
    /// Sends the stored bearer token and ends the session on 401.
    Admin,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    kind: ClientKind,
    timeout: Duration,
    token_store: Option<Arc<dyn TokenStore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiClient {
    pub fn public(config: &ApiConfig) -> Result<Self, AppError> {
        Self::build(config, ClientKind::Public, config.public_timeout(), None)
    }

    pub fn admin(config: &ApiConfig, token_store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        Self::build(
            config,
            ClientKind::Admin,
            config.admin_timeout(),
            Some(token_store),
        )
    }

    fn build(
        config: &ApiConfig,
        kind: ClientKind,
        timeout: Duration,
        token_store: Option<Arc<dyn TokenStore>>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| AppError::Configuration(format!("HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            kind,
            timeout,
            token_store,
            notifier: None,
        })
    }

    /// Failed requests raise a notification in addition to returning `Err`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, AppError> {
        let request = self.request(Method::GET, path).query(query);
        self.send(request, Method::GET, path).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, AppError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(request, Method::POST, path).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value, AppError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.send(request, Method::PUT, path).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        let request = self.request(Method::DELETE, path);
        self.send(request, Method::DELETE, path).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<Value, AppError> {
        let request = self.authorize(request).await?;
        debug!(method = %method, path = %path, "api request");

        let result = self.execute(request).await;
        if let Err(err) = &result {
            warn!(method = %method, path = %path, error = %err, "api request failed");
            self.report(err).await;
        }
        result
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError> {
        if self.kind != ClientKind::Admin {
            return Ok(request);
        }
        let Some(store) = &self.token_store else {
            return Ok(request);
        };
        Ok(match store.load().await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, AppError> {
        let response = request.send().await.map_err(|err| self.transport_error(err))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| self.transport_error(err))?;

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| AppError::InvalidResponse(err.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.timeout.as_secs())
        } else {
            AppError::from(err)
        }
    }

    async fn report(&self, err: &AppError) {
        if self.kind == ClientKind::Admin && matches!(err, AppError::Unauthorized(_)) {
            if let Some(store) = &self.token_store {
                if let Err(clear_err) = store.clear().await {
                    warn!(error = %clear_err, "failed to clear rejected token");
                }
            }
            if let Some(notifier) = &self.notifier {
                notifier.notify(
                    Notification::new("Session expired")
                        .with_description("Please sign in again.")
                        .with_variant(NotificationVariant::Warning),
                );
            }
            return;
        }

        if let Some(notifier) = &self.notifier {
            notifier.notify(notification_for_error(err));
        }
    }
}
