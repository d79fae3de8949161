use super::api_client::ApiClient;
use crate::application::ports::portfolio_api::{AdminApi, PublicApi};
use crate::domain::entities::{AdminUser, ContactMessage, DashboardOverview, Project};
use crate::presentation::dto::auth_dto::{extract_token, LoginRequest};
use crate::presentation::dto::unwrap_data;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpPublicApi {
    client: Arc<ApiClient>,
}

impl HttpPublicApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PublicApi for HttpPublicApi {
    async fn project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        let body = self.client.get(&format!("/projects/{slug}"), &[]).await?;
        unwrap_data(body)
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        self.client.post("/contact-messages", message).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<String, AppError> {
        let body = self.client.post("/auth/login", request).await?;
        extract_token(&body)
            .ok_or_else(|| AppError::InvalidResponse("login response has no token".to_string()))
    }
}

pub struct HttpAdminApi {
    client: Arc<ApiClient>,
}

impl HttpAdminApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn current_user(&self) -> Result<AdminUser, AppError> {
        let body = self.client.get("/me", &[]).await?;
        unwrap_data(body)
    }

    async fn dashboard_overview(&self) -> Result<DashboardOverview, AppError> {
        let body = self.client.get("/admin/dashboard/overview", &[]).await?;
        unwrap_data(body)
    }
}
