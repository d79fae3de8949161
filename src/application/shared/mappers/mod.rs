pub mod experience;
pub mod project;
pub mod text;

use crate::domain::editable::EditableRecord;
use serde::Serialize;

pub use experience::to_experience_upsert_payload;
pub use project::to_project_upsert_payload;
pub use text::{
    features_to_text, highlights_to_text, lines_to_text, screenshots_to_text, slugify,
    text_to_features, text_to_highlights, text_to_lines, text_to_screenshots,
};

/// A record kind the admin API can create and update.
pub trait Upsertable: EditableRecord {
    type Payload: Serialize + Send + Sync;

    /// Collection segment under `/admin/`.
    const RESOURCE: &'static str;

    fn to_payload(&self, sort_order: i64) -> Self::Payload;
}
