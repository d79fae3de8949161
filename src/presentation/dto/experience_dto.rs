use serde::{Deserialize, Serialize};

/// Body of `POST /admin/experiences` and `PUT /admin/experiences/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpsertPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Always serialized; `null` for a current position or a blank date.
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: String,
    pub sort_order: i64,
    pub tag_ids: Vec<String>,
    pub highlights: Vec<String>,
}
