//! Address-format validation.

use crate::error::RuleError;
use crate::rules::{is_address, INVALID_EMAIL};
use crate::trace;

/// Validate an e-mail address.
///
/// Unlike the option-driven validators this has a single rule: an absent,
/// empty or non-matching address is a `Format` error.
///
/// ```rust
/// use fieldcheck::validate_email;
///
/// assert!(validate_email(Some("a@b.com")).is_ok());
/// assert!(validate_email(Some("not-an-email")).is_err());
/// assert!(validate_email(None).is_err());
/// ```
pub fn validate_email(value: Option<&str>) -> Result<(), RuleError> {
    let result = match value {
        Some(address) if is_address(address) => Ok(()),
        _ => Err(RuleError::format("email", INVALID_EMAIL)),
    };
    trace::rejected("email", result)
}
