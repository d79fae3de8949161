use crate::domain::entities::{AdminUser, ContactMessage, DashboardOverview, Project};
use crate::presentation::dto::auth_dto::LoginRequest;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Unauthenticated endpoints of the portfolio API.
#[async_trait]
pub trait PublicApi: Send + Sync {
    async fn project_by_slug(&self, slug: &str) -> Result<Project, AppError>;

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), AppError>;

    /// Exchanges credentials for an access token.
    async fn login(&self, request: &LoginRequest) -> Result<String, AppError>;
}

/// Endpoints that need the admin bearer token.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn current_user(&self) -> Result<AdminUser, AppError>;

    async fn dashboard_overview(&self) -> Result<DashboardOverview, AppError>;
}
