//! # rusty-validator
//!
//! Form and record validation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_validator::{RuleOptions, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .validate("presence", "name", RuleOptions::new().message("Name is required"))?
//!     .validate("length", "password", RuleOptions::new().min(8))?
//!     .validate("confirmation", "password", RuleOptions::new())?;
//!
//! let record = json!({"name": "John Doe", "password": "secret"});
//! assert!(!validator.is_valid(&record));
//! ```
//!
//! ## Features
//!
//! - **`rules`** (default) - Declarative rule-set form validator ([`FormValidator`])
//! - **`full`** - All features enabled
//!
//! ## Architecture
//!
//! - **`rusty-validator-core`** - Predicates, message interpolation, [`Errors`]
//! - **`rusty-validator-dom`** - Form document, selectors and maud rendering
//! - **`rusty-validator-rules`** - Rule-set validator (optional)
//!
//! This crate adds the record validator: pluggable [`AttributeValidator`]s
//! registered by kind, a [`Form`] binding and [`ErrorRenderer`] strategies.

pub mod config;
pub mod error;
pub mod form;
pub mod record;
pub mod renderer;
pub mod validator;
pub mod validators;

pub use config::{RendererConfig, ValidationConfig, ValidationEntry};
pub use error::ValidatorError;
pub use form::Form;
pub use record::Record;
pub use renderer::{ContainerRenderer, ErrorRenderer, InlineErrorRenderer, ListRenderer};
pub use validator::{Factory, Validator};
pub use validators::{
    AttributeValidator, ConfirmationValidator, FormatValidator, LengthValidator, MessageOption,
    PresenceValidator, RuleOptions,
};

// Re-export the component crates
pub use rusty_validator_core::{Errors, EMAIL_FORMAT};
pub use rusty_validator_dom as dom;
pub use rusty_validator_dom::{Field, FieldKind, HtmlForm, Render, SelectOption, Selector};

#[cfg(feature = "rules")]
pub use rusty_validator_rules as rules;

#[cfg(feature = "rules")]
pub use rusty_validator_rules::{FormValidator, RuleSet, SubmitOutcome, ValidatorOptions};
