pub mod auth_service;
pub mod collection_service;
pub mod dashboard_service;
pub mod draft_editor;
pub mod portfolio_service;

pub use auth_service::AuthService;
pub use collection_service::CollectionService;
pub use dashboard_service::DashboardService;
pub use draft_editor::{DeleteOutcome, DraftEditor, EntryActivity, SaveOutcome};
pub use portfolio_service::PortfolioService;
