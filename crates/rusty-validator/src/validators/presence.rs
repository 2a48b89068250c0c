// File: src/validators/presence.rs

use super::{AttributeValidator, RuleOptions};
use crate::record::Record;
use rusty_validator_core::is_present;

pub const DEFAULT_PRESENCE_MESSAGE: &str = "can't be blank";

/// Rejects missing, empty and whitespace-only values
#[derive(Debug, Clone)]
pub struct PresenceValidator {
    attribute: String,
    message: String,
}

impl PresenceValidator {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: DEFAULT_PRESENCE_MESSAGE.to_string(),
        }
    }

    pub fn from_options(attribute: impl Into<String>, options: &RuleOptions) -> Self {
        let mut validator = Self::new(attribute);
        if let Some(message) = options.text_message() {
            validator.message = message;
        }
        validator
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl AttributeValidator for PresenceValidator {
    fn kind(&self) -> &str {
        "presence"
    }

    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn validate(&self, record: &dyn Record) -> Result<(), String> {
        if is_present(record.get(&self.attribute).as_deref()) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}
