// File: src/error.rs
// Purpose: Errors raised while declaring record validators

use rusty_validator_dom::SelectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("unknown validator kind '{0}'")]
    UnknownKind(String),

    #[error("validator '{kind}' on '{attribute}' needs the '{option}' option")]
    MissingOption {
        kind: String,
        attribute: String,
        option: &'static str,
    },

    #[error("invalid format for '{attribute}': {source}")]
    InvalidFormat {
        attribute: String,
        #[source]
        source: regex::Error,
    },

    #[error("validation '{0}' needs an attribute or a selector")]
    MissingTarget(String),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}
