use crate::application::ports::token_store::TokenStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, error};

pub const SERVICE_NAME: &str = "portfolio-admin";

/// Token kept in the OS credential store.
pub struct KeyringTokenStore {
    service: String,
    account: String,
}

impl KeyringTokenStore {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            account: account.into(),
        }
    }

    fn entry(&self) -> Result<Entry, AppError> {
        Entry::new(&self.service, &self.account).map_err(AppError::from)
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => {
                error!(account = %self.account, error = %err, "keyring read failed");
                Err(err.into())
            }
        }
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        debug!(account = %self.account, "storing access token in keyring");
        self.entry()?.set_password(token).map_err(|err| {
            error!(account = %self.account, error = %err, "keyring write failed");
            AppError::from(err)
        })
    }

    async fn clear(&self) -> Result<(), AppError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
