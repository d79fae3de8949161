use crate::application::ports::token_store::TokenStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Plain-file token store for machines without a usable keyring.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// `<data_local_dir>/portfolio-admin/<name>.token`.
    pub fn in_data_dir(name: &str) -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(super::keyring_token_store::SERVICE_NAME);
        path.push(format!("{name}.token"));
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        debug!(path = %self.path.display(), "writing access token");
        fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
