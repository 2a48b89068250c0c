// File: src/validators/confirmation.rs

use super::{AttributeValidator, RuleOptions};
use crate::record::Record;

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "must be equal to the confirmation";

/// `attribute` must equal `attribute_confirmation`
#[derive(Debug, Clone)]
pub struct ConfirmationValidator {
    attribute: String,
    confirmation: String,
    message: String,
}

impl ConfirmationValidator {
    pub fn new(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            confirmation: format!("{}_confirmation", attribute),
            attribute,
            message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }

    pub fn from_options(attribute: impl Into<String>, options: &RuleOptions) -> Self {
        let mut validator = Self::new(attribute);
        if let Some(message) = options.text_message() {
            validator.message = message;
        }
        validator
    }

    /// Name of the attribute holding the confirmation
    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }
}

impl AttributeValidator for ConfirmationValidator {
    fn kind(&self) -> &str {
        "confirmation"
    }

    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn validate(&self, record: &dyn Record) -> Result<(), String> {
        if record.get(&self.attribute) == record.get(&self.confirmation) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}
