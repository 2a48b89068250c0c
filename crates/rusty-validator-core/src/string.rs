//! String validation functions

use regex::Regex;

/// True when the value is empty or contains only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when a value exists and is not blank
pub fn is_present(value: Option<&str>) -> bool {
    value.map(|v| !is_blank(v)).unwrap_or(false)
}

/// Length of a value in characters (not bytes)
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// Validates minimum length (inclusive)
pub fn validate_min_length(value: &str, min: usize) -> bool {
    char_length(value) >= min
}

/// Validates maximum length (inclusive)
pub fn validate_max_length(value: &str, max: usize) -> bool {
    char_length(value) <= max
}

/// Validates length within an inclusive range
pub fn validate_length(value: &str, min: usize, max: usize) -> bool {
    validate_min_length(value, min) && validate_max_length(value, max)
}

/// Equality validator
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

/// Checks a value against a compiled format
pub fn matches_format(value: &str, format: &Regex) -> bool {
    format.is_match(value)
}
