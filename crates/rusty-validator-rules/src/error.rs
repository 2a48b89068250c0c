// File: src/error.rs
// Purpose: Errors raised while building a rule-set validator

use rusty_validator_dom::SelectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule '{rule}' on field '{field}' needs a non-negative integer, got '{param}'")]
    InvalidLength {
        field: String,
        rule: String,
        param: String,
    },

    #[error("rule '{rule}' on field '{field}' needs a selector")]
    MissingSelector { field: String, rule: String },

    #[error("invalid selector for rule '{rule}' on field '{field}': {source}")]
    Selector {
        field: String,
        rule: String,
        #[source]
        source: SelectorError,
    },

    #[error("failed to parse JSON rule set: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML rule set: {0}")]
    Toml(#[from] toml::de::Error),
}
