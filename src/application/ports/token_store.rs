use crate::shared::error::AppError;
use async_trait::async_trait;

/// Persistence for the admin access token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, AppError>;
    async fn save(&self, token: &str) -> Result<(), AppError>;
    /// Removing a token that is not there is not an error.
    async fn clear(&self) -> Result<(), AppError>;
}
