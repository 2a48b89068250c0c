// File: src/validators/length.rs

use super::{AttributeValidator, MessageOption, RuleOptions};
use crate::error::ValidatorError;
use crate::record::Record;
use rusty_validator_core::{validate_max_length, validate_min_length};

/// Inclusive character-count bounds; a missing value counts as ""
#[derive(Debug, Clone)]
pub struct LengthValidator {
    attribute: String,
    min: Option<usize>,
    max: Option<usize>,
    message: Option<MessageOption>,
}

impl LengthValidator {
    pub fn new(attribute: impl Into<String>, min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            attribute: attribute.into(),
            min,
            max,
            message: None,
        }
    }

    /// Build from options; at least one of `min`/`max` is required
    pub fn from_options(
        attribute: impl Into<String>,
        options: &RuleOptions,
    ) -> Result<Self, ValidatorError> {
        let attribute = attribute.into();

        if options.min.is_none() && options.max.is_none() {
            return Err(ValidatorError::MissingOption {
                kind: "length".to_string(),
                attribute,
                option: "min/max",
            });
        }

        let mut validator = Self::new(attribute, options.min, options.max);
        validator.message = options.message.clone();
        Ok(validator)
    }

    fn message_for(&self, bound: &str, limit: usize) -> String {
        self.message
            .as_ref()
            .and_then(|m| m.for_bound(bound))
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| match bound {
                "min" => format!("can't have less than {} characters", limit),
                _ => format!("can't have more than {} characters", limit),
            })
    }
}

impl AttributeValidator for LengthValidator {
    fn kind(&self) -> &str {
        "length"
    }

    fn attribute(&self) -> &str {
        &self.attribute
    }

    fn validate(&self, record: &dyn Record) -> Result<(), String> {
        let value = record.get(&self.attribute).unwrap_or_default();

        if let Some(min) = self.min {
            if !validate_min_length(&value, min) {
                return Err(self.message_for("min", min));
            }
        }

        if let Some(max) = self.max {
            if !validate_max_length(&value, max) {
                return Err(self.message_for("max", max));
            }
        }

        Ok(())
    }
}
