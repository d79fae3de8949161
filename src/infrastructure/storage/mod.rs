pub mod file_token_store;
pub mod keyring_token_store;
pub mod memory_token_store;

pub use file_token_store::FileTokenStore;
pub use keyring_token_store::KeyringTokenStore;
pub use memory_token_store::MemoryTokenStore;

use crate::application::ports::token_store::TokenStore;
use crate::shared::config::{AuthConfig, TokenStoreKind};
use std::sync::Arc;

pub fn token_store_for(config: &AuthConfig) -> Arc<dyn TokenStore> {
    match config.token_store {
        TokenStoreKind::Keyring => Arc::new(KeyringTokenStore::new(&config.access_token_name)),
        TokenStoreKind::File => Arc::new(FileTokenStore::in_data_dir(&config.access_token_name)),
        TokenStoreKind::Memory => Arc::new(MemoryTokenStore::default()),
    }
}
