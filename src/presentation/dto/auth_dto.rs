use super::Validate;
use crate::domain::value_objects::is_valid_email;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

/// Access token from a login response: `token`, then `data.token`.
pub fn extract_token(body: &Value) -> Option<String> {
    [body.pointer("/token"), body.pointer("/data/token")]
        .into_iter()
        .flatten()
        .find_map(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
