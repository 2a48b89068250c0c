// File: src/validator.rs
// Purpose: Record validator: a registry of validator kinds plus declared checks

use crate::error::ValidatorError;
use crate::record::Record;
use crate::validators::{
    AttributeValidator, ConfirmationValidator, FormatValidator, LengthValidator,
    PresenceValidator, RuleOptions,
};
use rusty_validator_core::Errors;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds a validator for an attribute from its options
pub type Factory = Arc<
    dyn Fn(&str, &RuleOptions) -> Result<Box<dyn AttributeValidator>, ValidatorError> + Send + Sync,
>;

/// Validates any [`Record`] against the declared checks
///
/// ```rust,ignore
/// let mut validator = Validator::new();
/// validator.validate("presence", "name", RuleOptions::new().message("Name is required"))?;
/// validator.validate("length", "password", RuleOptions::new().min(8))?;
///
/// if !validator.is_valid(&record) {
///     for (attribute, messages) in validator.errors().all() {
///         println!("{}: {:?}", attribute, messages);
///     }
/// }
/// ```
pub struct Validator {
    factories: HashMap<String, Factory>,
    validators: Vec<Box<dyn AttributeValidator>>,
    errors: Errors,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&String> = self.factories.keys().collect();
        kinds.sort();
        f.debug_struct("Validator")
            .field("kinds", &kinds)
            .field("validators", &self.validators)
            .field("errors", &self.errors)
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator with the built-in kinds registered
    pub fn new() -> Self {
        let mut validator = Self {
            factories: HashMap::new(),
            validators: Vec::new(),
            errors: Errors::new(),
        };

        validator.register("presence", |attribute, options| {
            Ok(Box::new(PresenceValidator::from_options(attribute, options)))
        });
        validator.register("format", |attribute, options| {
            Ok(Box::new(FormatValidator::from_options(attribute, options)?))
        });
        validator.register("length", |attribute, options| {
            Ok(Box::new(LengthValidator::from_options(attribute, options)?))
        });
        validator.register("confirmation", |attribute, options| {
            Ok(Box::new(ConfirmationValidator::from_options(attribute, options)))
        });

        validator
    }

    /// Register (or replace) a validator kind
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&str, &RuleOptions) -> Result<Box<dyn AttributeValidator>, ValidatorError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(kind.into(), Arc::new(factory));
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Declare a check of `attribute` by the validator registered as `kind`
    pub fn validate(
        &mut self,
        kind: &str,
        attribute: &str,
        options: RuleOptions,
    ) -> Result<&mut Self, ValidatorError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| ValidatorError::UnknownKind(kind.to_string()))?;

        let validator = factory(attribute, &options)?;
        debug!(kind, attribute, "validator declared");
        self.validators.push(validator);
        Ok(self)
    }

    /// Declare an already built validator
    pub fn add(&mut self, validator: Box<dyn AttributeValidator>) -> &mut Self {
        self.validators.push(validator);
        self
    }

    /// Run every check; errors from a previous run are cleaned first
    pub fn is_valid(&mut self, record: &dyn Record) -> bool {
        self.errors.clean();

        for validator in &self.validators {
            if let Err(message) = validator.validate(record) {
                debug!(
                    kind = validator.kind(),
                    attribute = validator.attribute(),
                    message = %message,
                    "check failed"
                );
                self.errors.add(validator.attribute(), message);
            }
        }

        self.errors.is_empty()
    }

    /// Errors of the last [`is_valid`](Self::is_valid) run
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn validators(&self) -> &[Box<dyn AttributeValidator>] {
        &self.validators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unknown_kind() {
        let mut validator = Validator::new();
        let err = validator
            .validate("uniqueness", "email", RuleOptions::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown validator kind 'uniqueness'");
    }

    #[test]
    fn test_chained_declarations() {
        let mut validator = Validator::new();
        validator
            .validate("presence", "password", RuleOptions::new())
            .unwrap()
            .validate("length", "password", RuleOptions::new().min(8))
            .unwrap();

        let kinds: Vec<&str> = validator.validators().iter().map(|v| v.kind()).collect();
        assert_eq!(kinds, vec!["presence", "length"]);
    }

    #[test]
    fn test_every_failure_is_recorded_in_order() {
        let mut validator = Validator::new();
        validator
            .validate("presence", "password", RuleOptions::new())
            .unwrap()
            .validate("length", "password", RuleOptions::new().min(8))
            .unwrap()
            .validate("presence", "name", RuleOptions::new())
            .unwrap();

        assert!(!validator.is_valid(&json!({})));
        assert_eq!(
            validator.errors().on("password"),
            &[
                "can't be blank".to_string(),
                "can't have less than 8 characters".to_string()
            ]
        );
        assert_eq!(validator.errors().len(), 3);
    }

    #[test]
    fn test_errors_are_cleaned_between_runs() {
        let mut validator = Validator::new();
        validator
            .validate("presence", "name", RuleOptions::new())
            .unwrap();

        assert!(!validator.is_valid(&json!({})));
        assert!(validator.is_valid(&json!({"name": "John"})));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_bad_options_are_reported() {
        let mut validator = Validator::new();
        assert!(validator
            .validate("format", "username", RuleOptions::new())
            .is_err());
        assert!(validator.validators().is_empty());
    }
}
