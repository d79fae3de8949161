use crate::domain::entities::AdminUser;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Admin session as seen by screens and guards.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn user(&self) -> Option<AdminUser>;

    async fn is_authenticated(&self) -> bool;

    async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AppError>;

    async fn logout(&self) -> Result<(), AppError>;
}
