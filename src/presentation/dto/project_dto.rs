use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /admin/projects` and `PUT /admin/projects/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpsertPayload {
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub long_description: String,
    pub cover_image_url: String,
    pub category: String,
    pub timeline: String,
    pub role: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub technical_details: Map<String, Value>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub screenshots: Vec<String>,
    pub is_featured: bool,
    pub sort_order: i64,
    pub tag_ids: Vec<String>,
    pub features: Vec<String>,
}
