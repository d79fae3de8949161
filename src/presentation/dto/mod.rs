pub mod auth_dto;
pub mod experience_dto;
pub mod project_dto;

use crate::shared::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiListMeta>,
}

impl<T> ApiListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, meta: None }
    }

    pub fn has_more(&self) -> bool {
        self.meta.as_ref().is_some_and(|meta| meta.has_more)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiListMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Decodes a single resource sent either as `{ "data": resource }` or bare.
pub fn unwrap_data<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    let inner = match body {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|err| AppError::InvalidResponse(err.to_string()))
}

/// Id of a freshly created record: `data.id`, then `id`, then `data.data.id`.
pub fn extract_created_id(body: &Value) -> Option<String> {
    let candidates = [
        body.pointer("/data/id"),
        body.pointer("/id"),
        body.pointer("/data/data/id"),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
}

// Request validation
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
