//! Client library for a portfolio site's REST API.
//!
//! Besides typed access to the public read models (projects, experiences,
//! contact form) it provides the admin editors, which keep a local draft
//! list and reconcile it with the server on save and delete.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::services::{DeleteOutcome, DraftEditor, SaveOutcome};
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;
