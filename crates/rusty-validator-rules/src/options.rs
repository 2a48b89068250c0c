// File: src/options.rs
// Purpose: Validator options (class names, default messages) loadable from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Built-in default messages, keyed by rule name
pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required", "This field is required"),
    ("email", "Fill this field with the format \"user@server.com\""),
    ("min", "Fill this field with minimun of {0} characters."),
    ("max", "Fill this field with maximun of {0} characters."),
    ("equalTo", "This field is wrong."),
];

/// Presentation and message options of a [`FormValidator`](crate::FormValidator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorOptions {
    /// Class put on the container of an invalid field
    #[serde(default = "default_container_class")]
    pub container_field_error_class: String,

    /// Class of the inline error message element
    #[serde(default = "default_message_class")]
    pub message_error_class: String,

    /// Message for rules without a default message
    #[serde(default = "default_error_message")]
    pub default_error_message: String,

    /// Heading of the error list shown when submission is blocked
    #[serde(default = "default_error_list_message")]
    pub default_error_list_message: String,

    /// Overrides for the built-in default messages
    #[serde(default)]
    pub default_messages: HashMap<String, String>,

    /// Id of the element receiving the error list; no list when unset
    #[serde(default)]
    pub error_list_container: Option<String>,
}

// Default values
fn default_container_class() -> String {
    "with-error".to_string()
}

fn default_message_class() -> String {
    "error".to_string()
}

fn default_error_message() -> String {
    "Fix this field.".to_string()
}

fn default_error_list_message() -> String {
    "Please double check your data before continuing:".to_string()
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            container_field_error_class: default_container_class(),
            message_error_class: default_message_class(),
            default_error_message: default_error_message(),
            default_error_list_message: default_error_list_message(),
            default_messages: HashMap::new(),
            error_list_container: None,
        }
    }
}

impl ValidatorOptions {
    /// Load options from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).context(format!("cannot read validator options at {}", path.display()))
            }
        };

        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse options from TOML text; blank text yields the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).context("invalid validator options")
    }

    /// Built-in defaults merged with the configured overrides
    pub fn merged_default_messages(&self) -> HashMap<String, String> {
        let mut messages: HashMap<String, String> = DEFAULT_MESSAGES
            .iter()
            .map(|(rule, message)| (rule.to_string(), message.to_string()))
            .collect();

        for (rule, message) in &self.default_messages {
            if !message.is_empty() {
                messages.insert(rule.clone(), message.clone());
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = ValidatorOptions::default();
        assert_eq!(options.container_field_error_class, "with-error");
        assert_eq!(options.message_error_class, "error");
        assert_eq!(options.default_error_message, "Fix this field.");
        assert!(options.error_list_container.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let options = ValidatorOptions::from_toml("  \n").unwrap();
        assert_eq!(options.container_field_error_class, "with-error");
        assert_eq!(
            options.default_error_list_message,
            "Please double check your data before continuing:"
        );
    }

    #[test]
    fn test_partial_default_messages_override() {
        let options: ValidatorOptions = toml::from_str(
            r##"
            error_list_container = "#error-messages-content"
            default_error_list_message = "Por favor, verifique os erros."

            [default_messages]
            required = "Este campo é requerido."
            min = "Preencha este campo com no mínimo de {0} caracteres."
            "##,
        )
        .unwrap();

        let messages = options.merged_default_messages();
        assert_eq!(messages["required"], "Este campo é requerido.");
        assert_eq!(messages["min"], "Preencha este campo com no mínimo de {0} caracteres.");
        assert_eq!(messages["equalTo"], "This field is wrong.");
        assert_eq!(
            options.error_list_container.as_deref(),
            Some("#error-messages-content")
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let options = ValidatorOptions::load("/definitely/not/here/validator.toml").unwrap();
        assert_eq!(options.message_error_class, "error");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join("rusty-validator-options-invalid.toml");
        fs::write(&path, "container_field_error_class = [").unwrap();

        let err = ValidatorOptions::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid validator options"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join("rusty-validator-options-valid.toml");
        fs::write(
            &path,
            r##"
            container_field_error_class = "has-error"
            error_list_container = "#errors"

            [default_messages]
            required = "Este campo é requerido."
            "##,
        )
        .unwrap();

        let options = ValidatorOptions::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(options.container_field_error_class, "has-error");
        assert_eq!(options.message_error_class, "error");
        assert_eq!(options.error_list_container.as_deref(), Some("#errors"));
        assert_eq!(
            options.merged_default_messages()["required"],
            "Este campo é requerido."
        );
    }
}
