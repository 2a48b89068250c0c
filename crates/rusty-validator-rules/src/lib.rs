//! Rusty-Validator Rules
//!
//! Declarative rule-set validation of an [`HtmlForm`](rusty_validator_dom::HtmlForm):
//! rules keyed by field name (`required`, `email`, `min`, `max`, `equalTo` and
//! custom methods), messages resolved once with their parameters, inline error
//! decoration and a blocking error list on submit.

pub mod error;
pub mod methods;
pub mod options;
pub mod param;
pub mod ruleset;
pub mod validator;

pub use error::RuleError;
pub use methods::{Method, RuleInput};
pub use options::{ValidatorOptions, DEFAULT_MESSAGES};
pub use param::{FieldRules, Predicate, RuleParam};
pub use ruleset::RuleSet;
pub use validator::{FormValidator, SubmitOutcome};
