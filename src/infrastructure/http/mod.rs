pub mod api_client;
pub mod collection_api;
pub mod error_mapping;
pub mod portfolio_api;

pub use api_client::{ApiClient, ClientKind};
pub use collection_api::HttpCollectionApi;
pub use error_mapping::{error_from_response, notification_for_error};
pub use portfolio_api::{HttpAdminApi, HttpPublicApi};
