use crate::application::ports::portfolio_api::{AdminApi, PublicApi};
use crate::application::ports::session::SessionProvider;
use crate::application::ports::token_store::TokenStore;
use crate::domain::entities::{AdminUser, Role};
use crate::presentation::dto::auth_dto::LoginRequest;
use crate::presentation::dto::Validate;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct AuthService {
    public_api: Arc<dyn PublicApi>,
    admin_api: Arc<dyn AdminApi>,
    token_store: Arc<dyn TokenStore>,
    user: RwLock<Option<AdminUser>>,
}

impl AuthService {
    pub fn new(
        public_api: Arc<dyn PublicApi>,
        admin_api: Arc<dyn AdminApi>,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            public_api,
            admin_api,
            token_store,
            user: RwLock::new(None),
        }
    }

    /// Restores a session from a stored token. A token the API no longer
    /// accepts is discarded.
    pub async fn init(&self) -> Result<Option<AdminUser>, AppError> {
        if self.token_store.load().await?.is_none() {
            return Ok(None);
        }

        match self.admin_api.current_user().await {
            Ok(user) => {
                *self.user.write().await = Some(user.clone());
                Ok(Some(user))
            }
            Err(err) => {
                warn!(error = %err, "stored session rejected");
                self.token_store.clear().await?;
                *self.user.write().await = None;
                Ok(None)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AppError> {
        let request = LoginRequest::new(email, password);
        request.validate().map_err(AppError::Validation)?;

        let token = self.public_api.login(&request).await?;
        self.token_store.save(&token).await?;

        match self.admin_api.current_user().await {
            Ok(user) => {
                info!(email = %user.email, "admin signed in");
                *self.user.write().await = Some(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.token_store.clear().await?;
                Err(err)
            }
        }
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.token_store.clear().await?;
        *self.user.write().await = None;
        info!("admin signed out");
        Ok(())
    }

    pub async fn user(&self) -> Option<AdminUser> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Guard for admin-only operations.
    pub async fn require_admin(&self) -> Result<AdminUser, AppError> {
        match self.user().await {
            Some(user) if user.role == Role::Admin => Ok(user),
            Some(_) => Err(AppError::Unauthorized("Admin role required".to_string())),
            None => Err(AppError::Unauthorized("Not signed in".to_string())),
        }
    }
}

#[async_trait]
impl SessionProvider for AuthService {
    async fn user(&self) -> Option<AdminUser> {
        AuthService::user(self).await
    }

    async fn is_authenticated(&self) -> bool {
        AuthService::is_authenticated(self).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AppError> {
        AuthService::login(self, email, password).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        AuthService::logout(self).await
    }
}
