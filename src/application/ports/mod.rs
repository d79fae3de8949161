pub mod cache;
pub mod collection_api;
pub mod notifier;
pub mod portfolio_api;
pub mod session;
pub mod token_store;

pub use cache::ResponseCache;
pub use collection_api::{CollectionApi, ListQuery, RecordApi};
pub use notifier::{Notification, NotificationVariant, Notifier};
pub use portfolio_api::{AdminApi, PublicApi};
pub use session::SessionProvider;
pub use token_store::TokenStore;
