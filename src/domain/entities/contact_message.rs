use crate::domain::value_objects::email::is_valid_email;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Copy with every field trimmed, as it is sent on the wire.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        let trimmed = self.trimmed();
        if trimmed.name.is_empty()
            || trimmed.email.is_empty()
            || trimmed.subject.is_empty()
            || trimmed.message.is_empty()
        {
            return Err("Please fill in all required fields.".to_string());
        }
        if !is_valid_email(&trimmed.email) {
            return Err("Email address is not valid.".to_string());
        }
        Ok(())
    }
}
