// File: src/validators/mod.rs
// Purpose: Attribute validators and the options they are built from

mod confirmation;
mod format;
mod length;
mod presence;

pub use confirmation::{ConfirmationValidator, DEFAULT_CONFIRMATION_MESSAGE};
pub use format::{FormatValidator, DEFAULT_FORMAT_MESSAGE};
pub use length::LengthValidator;
pub use presence::{PresenceValidator, DEFAULT_PRESENCE_MESSAGE};

use crate::record::Record;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Debug;

/// One check of one attribute of a [`Record`]
///
/// `validate` returns the error message on failure.
pub trait AttributeValidator: Debug + Send + Sync {
    /// Kind name the validator is registered under (`presence`, `length`, ...)
    fn kind(&self) -> &str;

    fn attribute(&self) -> &str;

    fn validate(&self, record: &dyn Record) -> Result<(), String>;
}

/// Custom message: one text for every failure, or one per bound
///
/// ```toml
/// message = "Password is required"
/// # or
/// message = { min = "Password must have at least 8 characters" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageOption {
    Text(String),
    PerBound(HashMap<String, String>),
}

impl MessageOption {
    /// Message for a failing bound (`min`, `max`); a plain text covers all
    pub fn for_bound(&self, bound: &str) -> Option<&str> {
        match self {
            MessageOption::Text(text) => Some(text),
            MessageOption::PerBound(messages) => messages.get(bound).map(String::as_str),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageOption::Text(text) => Some(text),
            MessageOption::PerBound(_) => None,
        }
    }
}

/// Options passed when declaring a validator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleOptions {
    #[serde(default)]
    pub message: Option<MessageOption>,

    /// Regular expression for `format`
    #[serde(default)]
    pub format: Option<String>,

    /// Inclusive bounds for `length`
    #[serde(default)]
    pub min: Option<usize>,

    #[serde(default)]
    pub max: Option<usize>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(MessageOption::Text(message.into()));
        self
    }

    /// Message for a single bound of a `length` validator
    pub fn bound_message(mut self, bound: impl Into<String>, message: impl Into<String>) -> Self {
        let mut messages = match self.message.take() {
            Some(MessageOption::PerBound(messages)) => messages,
            _ => HashMap::new(),
        };
        messages.insert(bound.into(), message.into());
        self.message = Some(MessageOption::PerBound(messages));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Custom text message, ignoring empty strings
    pub(crate) fn text_message(&self) -> Option<String> {
        self.message
            .as_ref()
            .and_then(MessageOption::as_text)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}
