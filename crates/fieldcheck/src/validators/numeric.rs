//! Numeric validation, generic over the primitive integer and float types.

use crate::error::RuleError;
use crate::protocol::{check_bounds, check_presence, BoundMessages, BoundMode, Subject};
use crate::trace;
use crate::traits::{Extensions, ValidationRule};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const RANGE: BoundMessages = BoundMessages {
    code: "range",
    below: "is lesser than {min} minimum value",
    above: "is greater than {max} maximum value",
};

/// A totally ordered, copyable number with a zero value.
pub trait Numeric:
    Subject
    + PartialOrd
    + Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = $zero;
            }

            impl Subject for $t {
                fn is_zero(&self) -> bool {
                    *self == Self::ZERO
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

/// Constraints for [`validate_numeric`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericOptions<T> {
    /// Accept an absent value
    pub allow_absent: bool,
    /// Accept zero
    pub allow_empty: bool,
    /// Minimum value (inclusive)
    pub min: Option<T>,
    /// Maximum value (inclusive)
    pub max: Option<T>,
    /// Interpretation of zero and negative bounds
    pub bound_mode: BoundMode,
    /// Caller rules, run after the built-in checks
    #[serde(skip)]
    pub extensions: Extensions<T>,
}

impl<T: Numeric> NumericOptions<T> {
    /// Options with every constraint off.
    pub fn new() -> Self {
        Self {
            allow_absent: false,
            allow_empty: false,
            min: None,
            max: None,
            bound_mode: BoundMode::default(),
            extensions: Extensions::new(),
        }
    }

    /// Accept an absent value.
    pub fn allow_absent(mut self) -> Self {
        self.allow_absent = true;
        self
    }

    /// Accept zero.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Set the minimum value.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum value.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
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
        R: ValidationRule<T> + 'static,
    {
        self.extensions.push(rule);
        self
    }
}

/// Validate a number against `options`.
///
/// In [`BoundMode::Legacy`] a bound only applies when it is greater than zero:
///
/// ```rust
/// use fieldcheck::{validate_numeric, BoundMode, NumericOptions};
///
/// let legacy = NumericOptions::new().min(-10);
/// assert!(validate_numeric(Some(&-50), Some(&legacy)).is_ok());
///
/// let strict = legacy.bound_mode(BoundMode::Strict);
/// assert!(validate_numeric(Some(&-50), Some(&strict)).is_err());
/// ```
pub fn validate_numeric<T: Numeric>(
    value: Option<&T>,
    options: Option<&NumericOptions<T>>,
) -> Result<(), RuleError> {
    let Some(opts) = options else {
        return Ok(());
    };
    trace::rejected("numeric", check(value, opts))
}

fn check<T: Numeric>(value: Option<&T>, opts: &NumericOptions<T>) -> Result<(), RuleError> {
    let Some(value) = check_presence(value, opts.allow_absent, opts.allow_empty)? else {
        return Ok(());
    };

    let min = opts.bound_mode.active(opts.min.as_ref(), &T::ZERO);
    let max = opts.bound_mode.active(opts.max.as_ref(), &T::ZERO);
    check_bounds(value, min, max, &RANGE)?;

    opts.extensions.run(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Direction, ErrorKind};

    #[test]
    fn no_options_always_pass() {
        assert!(validate_numeric::<i32>(None, None).is_ok());
        assert!(validate_numeric(Some(&0u8), None).is_ok());
    }

    #[test]
    fn zero_requires_allow_empty() {
        let opts = NumericOptions::<i64>::new();
        let err = validate_numeric(Some(&0), Some(&opts)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.message, "must be provided (empty)");

        let opts = opts.allow_empty();
        assert!(validate_numeric(Some(&0), Some(&opts)).is_ok());
    }

    #[test]
    fn allowed_zero_is_checked_against_bounds() {
        let opts = NumericOptions::new().allow_empty().min(5);
        let err = validate_numeric(Some(&0), Some(&opts)).unwrap_err();
        assert_eq!(err.direction(), Some(Direction::BelowMinimum));
    }

    #[test]
    fn bounds_inclusive() {
        let opts = NumericOptions::new().min(18u8).max(120);
        assert!(validate_numeric(Some(&18), Some(&opts)).is_ok());
        assert!(validate_numeric(Some(&120), Some(&opts)).is_ok());

        let err = validate_numeric(Some(&17), Some(&opts)).unwrap_err();
        assert_eq!(err.interpolate_message(), "is lesser than 18 minimum value");

        let err = validate_numeric(Some(&121), Some(&opts)).unwrap_err();
        assert_eq!(err.interpolate_message(), "is greater than 120 maximum value");
    }

    #[test]
    fn floats() {
        let opts = NumericOptions::new().min(0.5f64).max(1.5);
        assert!(validate_numeric(Some(&1.0), Some(&opts)).is_ok());
        assert!(validate_numeric(Some(&0.25), Some(&opts)).is_err());
        assert!(validate_numeric(Some(&2.0), Some(&opts)).is_err());
        assert!(validate_numeric(Some(&0.0), Some(&opts)).is_err());
    }

    // Negative and zero bounds are skipped entirely in legacy mode, even when
    // the value is clearly below them.
    #[test]
    fn legacy_mode_skips_non_positive_min() {
        let opts = NumericOptions::new().min(-10);
        assert!(validate_numeric(Some(&-5), Some(&opts)).is_ok());
        assert!(validate_numeric(Some(&-500), Some(&opts)).is_ok());

        let opts = NumericOptions::new().max(-10);
        assert!(validate_numeric(Some(&100), Some(&opts)).is_ok());
    }

    #[test]
    fn strict_mode_enforces_non_positive_bounds() {
        let opts = NumericOptions::new().min(-10).max(0).bound_mode(BoundMode::Strict);
        assert!(validate_numeric(Some(&-5), Some(&opts)).is_ok());
        assert_eq!(
            validate_numeric(Some(&-11), Some(&opts)).unwrap_err().direction(),
            Some(Direction::BelowMinimum)
        );
        assert_eq!(
            validate_numeric(Some(&1), Some(&opts)).unwrap_err().direction(),
            Some(Direction::AboveMaximum)
        );
    }

    #[test]
    fn wide_integer_bounds_stay_in_message() {
        let opts = NumericOptions::new().max(u128::MAX / 2);
        let err = validate_numeric(Some(&u128::MAX), Some(&opts)).unwrap_err();
        let bound = (u128::MAX / 2).to_string();
        assert_eq!(err.params["max"], serde_json::Value::String(bound.clone()));
        assert_eq!(err.interpolate_message(), format!("is greater than {} maximum value", bound));

        let opts = NumericOptions::new().min(i128::MIN).bound_mode(BoundMode::Strict);
        assert!(validate_numeric(Some(&i128::MIN), Some(&opts)).is_ok());

        let opts = NumericOptions::new().min(i128::MIN + 1).bound_mode(BoundMode::Strict);
        let err = validate_numeric(Some(&i128::MIN), Some(&opts)).unwrap_err();
        assert!(err.interpolate_message().contains(&(i128::MIN + 1).to_string()));
    }

    #[test]
    fn narrow_integer_bounds_stay_numeric() {
        let opts = NumericOptions::new().max(10u128);
        let err = validate_numeric(Some(&11u128), Some(&opts)).unwrap_err();
        assert_eq!(err.params["max"], 10);
    }
}
