//! String validation: code-point length bounds and space exclusion.

use crate::error::RuleError;
use crate::protocol::{check_bounds, check_presence, BoundMessages, BoundMode};
use crate::trace;
use crate::traits::{Extensions, ValidationRule};
use serde::{Deserialize, Serialize};

const LENGTH: BoundMessages = BoundMessages {
    code: "length",
    below: "is shorter than {min} characters",
    above: "is longer than {max} characters",
};

/// Constraints for [`validate_string`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringOptions {
    /// Accept an absent value
    pub allow_absent: bool,
    /// Accept an empty string
    pub allow_empty: bool,
    /// Minimum length in characters (inclusive)
    pub min_length: Option<usize>,
    /// Maximum length in characters (inclusive)
    pub max_length: Option<usize>,
    /// Reject values containing a space character
    pub no_spaces: bool,
    /// Interpretation of zero-valued length bounds
    pub bound_mode: BoundMode,
    /// Caller rules, run after the built-in checks
    #[serde(skip)]
    pub extensions: Extensions<str>,
}

impl StringOptions {
    /// Options with every constraint off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an absent value.
    pub fn allow_absent(mut self) -> Self {
        self.allow_absent = true;
        self
    }

    /// Accept an empty string.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Set the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Reject values containing spaces.
    pub fn no_spaces(mut self) -> Self {
        self.no_spaces = true;
        self
    }

    /// Set the bound mode.
    pub fn bound_mode(mut self, mode: BoundMode) -> Self {
        self.bound_mode = mode;
        self
    }

    /// Register an extension rule.
    pub fn extend<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<str> + 'static,
    {
        self.extensions.push(rule);
        self
    }
}

/// Validate a string against `options`.
///
/// Length is counted in Unicode scalar values, so `"é"` has length 1.
///
/// ```rust
/// use fieldcheck::{validate_string, StringOptions};
///
/// let opts = StringOptions::new().min_length(3).no_spaces();
/// assert!(validate_string(Some("abc"), Some(&opts)).is_ok());
/// assert!(validate_string(Some("ab"), Some(&opts)).is_err());
/// assert!(validate_string(Some("a bc"), Some(&opts)).is_err());
/// ```
pub fn validate_string(
    value: Option<&str>,
    options: Option<&StringOptions>,
) -> Result<(), RuleError> {
    let Some(opts) = options else {
        return Ok(());
    };
    trace::rejected("string", check(value, opts))
}

fn check(value: Option<&str>, opts: &StringOptions) -> Result<(), RuleError> {
    let Some(value) = check_presence(value, opts.allow_absent, opts.allow_empty)? else {
        return Ok(());
    };

    let len = value.chars().count();
    let min = opts.bound_mode.active(opts.min_length.as_ref(), &0);
    let max = opts.bound_mode.active(opts.max_length.as_ref(), &0);
    check_bounds(&len, min, max, &LENGTH)?;

    if opts.no_spaces && value.contains(' ') {
        return Err(RuleError::format("no_spaces", "contains spaces"));
    }

    opts.extensions.run(value)
}
