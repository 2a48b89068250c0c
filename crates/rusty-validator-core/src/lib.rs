//! Rusty-Validator Core
//!
//! Plain validation predicates, message interpolation and the ordered error
//! collection shared by the rule-set validator and the record validator.

pub mod email;
pub mod errors;
pub mod message;
pub mod string;

// Re-export all predicates
pub use email::*;
pub use errors::Errors;
pub use message::*;
pub use string::*;
