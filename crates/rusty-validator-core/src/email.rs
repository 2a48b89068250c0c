//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Stricter address format, suitable for a `format` validator
pub const EMAIL_FORMAT: &str =
    r"(?i)^[a-z0-9]+([._][a-z0-9]+)*(\+[a-z0-9_-]+)?@[a-z0-9]+([.-][a-z0-9]+)*\.[a-z]{2,4}$";

// Loose check: something, an @, something, a dot, something
static LOOSE_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static STRICT_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_FORMAT).unwrap());

/// Validates basic email format
///
/// The check is intentionally loose and unanchored, so `"a b@c.d"` passes
/// because `b@c.d` matches.
pub fn is_valid_email(email: &str) -> bool {
    LOOSE_EMAIL_REGEX.is_match(email)
}

/// Validates email against [`EMAIL_FORMAT`]
pub fn is_valid_email_strict(email: &str) -> bool {
    STRICT_EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_email() {
        assert!(is_valid_email("carlohcs@gmail.com"));
        assert!(is_valid_email("user@server.com"));
        assert!(is_valid_email("x@y.z"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@server"));
        assert!(!is_valid_email("userserver.com"));
    }

    #[test]
    fn test_strict_email() {
        assert!(is_valid_email_strict("john.doe+news@example.com"));
        assert!(is_valid_email_strict("JOHN@EXAMPLE.ORG"));

        assert!(!is_valid_email_strict("john..doe@example.com"));
        assert!(!is_valid_email_strict("john@example.museum"));
        assert!(!is_valid_email_strict("x@y.z"));
    }
}
