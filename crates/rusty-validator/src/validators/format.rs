// File: src/validators/format.rs

use super::{AttributeValidator, RuleOptions};
use crate::error::ValidatorError;
use crate::record::Record;
use regex::Regex;
use rusty_validator_core::matches_format;

pub const DEFAULT_FORMAT_MESSAGE: &str = "is an invalid format";

/// Value must match a regular expression; a missing value is checked as ""
#[derive(Debug, Clone)]
pub struct FormatValidator {
    attribute: String,
    format: Regex,
    message: String,
}

impl FormatValidator {
    pub fn new(attribute: impl Into<String>, format: Regex) -> Self {
        Self {
            attribute: attribute.into(),
            format,
            message: DEFAULT_FORMAT_MESSAGE.to_string(),
        }
    }

    /// Build from options; `format` is required and must compile
    pub fn from_options(
        attribute: impl Into<String>,
        options: &RuleOptions,
    ) -> Result<Self, ValidatorError> {
        let attribute = attribute.into();

        let pattern = options
            .format
            .as_deref()
            .ok_or_else(|| ValidatorError::MissingOption {
                kind: "format".to_string(),
                attribute: attribute.clone(),
                option: "format",
            })?;

        let format = Regex::new(pattern).map_err(|source| ValidatorError::InvalidFormat {
            attribute: attribute.clone(),
            source,
        })?;

        let mut validator = Self::new(attribute, format);
        if let Some(message) = options.text_message() {
            validator.message = message;
        }
        Ok(validator)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl AttributeValidator for FormatValidator {
    fn kind(&self) -> &str {
        "format"
    }

    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn validate(&self, record: &dyn Record) -> Result<(), String> {
        let value = record.get(&self.attribute).unwrap_or_default();
        if matches_format(&value, &self.format) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn username_options() -> RuleOptions {
        RuleOptions::new().format("(?i)^[a-z0-9_-]+$")
    }

    #[test]
    fn test_default_message() {
        let validator = FormatValidator::from_options("username", &username_options()).unwrap();
        assert_eq!(
            validator.validate(&json!({})),
            Err("is an invalid format".to_string())
        );
    }

    #[test]
    fn test_custom_message() {
        let options = username_options().message("custom");
        let validator = FormatValidator::from_options("username", &options).unwrap();
        assert_eq!(validator.validate(&json!({})), Err("custom".to_string()));
    }

    #[test]
    fn test_rejects_invalid_format() {
        let validator = FormatValidator::from_options("username", &username_options()).unwrap();
        assert!(validator.validate(&json!({"username": "this is invalid"})).is_err());
    }

    #[test]
    fn test_accepts_valid_format() {
        let validator = FormatValidator::from_options("username", &username_options()).unwrap();
        assert!(validator.validate(&json!({"username": "JohnDoe"})).is_ok());
    }

    #[test]
    fn test_format_option_is_required() {
        let err = FormatValidator::from_options("username", &RuleOptions::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validator 'format' on 'username' needs the 'format' option"
        );
    }

    #[test]
    fn test_invalid_regex() {
        let options = RuleOptions::new().format("([a-z");
        assert!(matches!(
            FormatValidator::from_options("username", &options),
            Err(ValidatorError::InvalidFormat { .. })
        ));
    }
}
