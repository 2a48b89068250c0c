// Rusty-Validator DOM
// In-memory stand-in for an HTML form: fields, selectors, error decoration
// and maud rendering.

pub mod field;
pub mod form;
pub mod render;
pub mod selector;

pub use field::{Field, FieldKind, FieldState, InlineError, SelectOption};
pub use form::{ErrorList, HtmlForm, ERROR_LIST_CLASS};
pub use selector::{Selector, SelectorError, Tag};

// Re-export maud's trait so callers can render documents and lists
pub use maud::Render;
