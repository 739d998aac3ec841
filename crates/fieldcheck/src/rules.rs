//! The address grammar and its rule form for string extensions.

use crate::error::RuleError;
use crate::traits::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Address grammar: local part, then one or more domain labels of up to 63
/// characters that neither start nor end with a hyphen.
pub const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9]",
    r"(?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
);

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

pub(crate) const INVALID_EMAIL: &str = "is an invalid email address";

/// Whether `value` is a non-empty string matching [`EMAIL_PATTERN`].
pub(crate) fn is_address(value: &str) -> bool {
    !value.is_empty() && email_regex().is_match(value)
}

/// Email format validation rule.
///
/// Same grammar as [`validate_email`](crate::validate_email). Registering it
/// on [`StringOptions`](crate::StringOptions) combines the address check with
/// length limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmailRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EmailRule {
    /// Create a new email rule with default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl ValidationRule<str> for EmailRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if is_address(value) {
            return Ok(());
        }
        let message = self.message.as_deref().unwrap_or(INVALID_EMAIL);
        Err(RuleError::format("email", message))
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn email_rule_valid() {
        let rule = EmailRule::new();
        assert!(rule.validate("test@example.com").is_ok());
        assert!(rule.validate("user.name+tag@domain.co.uk").is_ok());
        assert!(rule.validate("a@b").is_ok());
    }

    #[test]
    fn email_rule_invalid() {
        let rule = EmailRule::new();
        assert!(rule.validate("invalid").is_err());
        assert!(rule.validate("@domain.com").is_err());
        assert!(rule.validate("user@").is_err());
        assert!(rule.validate("user@-domain.com").is_err());
        assert!(rule.validate("user@domain-.com").is_err());
        assert!(rule.validate("user@domain..com").is_err());
    }

    #[test]
    fn email_label_length_limit() {
        let rule = EmailRule::new();
        let label_63 = "a".repeat(63);
        let label_64 = "a".repeat(64);
        assert!(rule.validate(&format!("x@{label_63}.com")).is_ok());
        assert!(rule.validate(&format!("x@{label_64}.com")).is_err());
    }

    #[test]
    fn email_rule_custom_message() {
        let rule = EmailRule::with_message("Please enter a valid email");
        let err = rule.validate("invalid").unwrap_err();
        assert_eq!(err.message, "Please enter a valid email");
        assert_eq!(err.kind, ErrorKind::Format);
    }
}
