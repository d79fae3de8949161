use crate::application::ports::notifier::{Notification, NotificationVariant};
use crate::shared::error::AppError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Every field is optional and loosely typed so that one odd field never
/// costs the others.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<ErrorField>,
    message: Option<Value>,
    #[serde(rename = "requestId")]
    request_id: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Detail(ErrorDetail),
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorDetail {
    message: Option<Value>,
    details: Option<Details>,
}

/// Keeps the server's key order for object details.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Details {
    Object(IndexMap<String, Value>),
    List(Vec<Value>),
    Other(Value),
}

fn non_empty(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn detail_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(detail_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn detail_pairs(details: Details) -> Option<IndexMap<String, String>> {
    match details {
        Details::Object(map) => Some(
            map.iter()
                .map(|(key, value)| (key.clone(), detail_text(value)))
                .collect(),
        ),
        Details::List(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), detail_text(value)))
                .collect(),
        ),
        Details::Other(ignored) => {
            debug!(details = %ignored, "scalar error details ignored");
            None
        }
    }
}

/// Normalises a non-2xx response. The message comes from `error.message`,
/// then `message`; `error.details` is kept when it is an object or a list.
pub fn error_from_response(status: u16, body: &str) -> AppError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let (nested_message, raw_details) = match parsed.error {
        Some(ErrorField::Detail(detail)) => (detail.message, detail.details),
        Some(ErrorField::Other(code)) => {
            debug!(error = %code, "non-object error field");
            (None, None)
        }
        None => (None, None),
    };

    let message = non_empty(nested_message)
        .or_else(|| non_empty(parsed.message))
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    match status {
        401 => AppError::Unauthorized(message),
        404 => AppError::NotFound(message),
        _ => AppError::Api {
            status,
            message,
            details: raw_details.and_then(detail_pairs),
            request_id: non_empty(parsed.request_id),
        },
    }
}

fn title_for_status(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    }
}

fn describe(
    message: &str,
    details: Option<&IndexMap<String, String>>,
    request_id: Option<&str>,
) -> String {
    if let Some(details) = details {
        let pairs: Vec<String> = details
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        let mut lines = vec![message.to_string()];
        if !pairs.is_empty() {
            lines.push(pairs.join(", "));
        }
        if let Some(rid) = request_id {
            lines.push(format!("rid: {rid}"));
        }
        return lines.join("\n");
    }
    match request_id {
        Some(rid) => format!("{message}\n(rid: {rid})"),
        None => message.to_string(),
    }
}

fn for_status(status: u16, description: String) -> Notification {
    let variant = if status >= 500 {
        NotificationVariant::Destructive
    } else {
        NotificationVariant::Warning
    };
    Notification::new(title_for_status(status))
        .with_description(description)
        .with_variant(variant)
}

/// The notification a failed request should raise.
pub fn notification_for_error(err: &AppError) -> Notification {
    match err {
        AppError::Api {
            status,
            message,
            details,
            request_id,
        } => for_status(
            *status,
            describe(message, details.as_ref(), request_id.as_deref()),
        ),
        AppError::Unauthorized(message) => for_status(401, message.clone()),
        AppError::NotFound(message) => for_status(404, message.clone()),
        AppError::Network(_) | AppError::Timeout(_) => Notification::new("Network Error")
            .with_description("No response received from the server.")
            .with_variant(NotificationVariant::Warning),
        other => Notification::new("Error")
            .with_description(other.to_string())
            .with_variant(NotificationVariant::Destructive),
    }
}
