//! Message template helpers

use std::fmt::Display;

/// Placeholder replaced by the rule parameter
pub const PARAM_PLACEHOLDER: &str = "{0}";

/// Replace the first `{0}` in a message with the given parameter
///
/// Only the first occurrence is replaced; further placeholders are left as
/// they are.
pub fn replace_message_params(message: &str, param: impl Display) -> String {
    if !message.contains(PARAM_PLACEHOLDER) {
        return message.to_string();
    }
    message.replacen(PARAM_PLACEHOLDER, &param.to_string(), 1)
}

/// Join list parameters into a single substitution value
pub fn join_params<T: Display>(params: &[T]) -> String {
    params.iter().map(|p| p.to_string()).collect()
}
