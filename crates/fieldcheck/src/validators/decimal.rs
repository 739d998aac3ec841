//! Arbitrary-precision decimal validation.

use crate::error::RuleError;
use crate::protocol::{check_bounds, check_presence, BoundMode, Subject};
use crate::trace;
use crate::traits::{Extensions, ValidationRule};
use crate::validators::numeric::RANGE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

impl Subject for Decimal {
    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

/// Constraints for [`validate_decimal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecimalOptions {
    /// Accept an absent value
    pub allow_absent: bool,
    /// Accept zero
    pub allow_empty: bool,
    /// Minimum value (inclusive)
    pub min: Option<Decimal>,
    /// Maximum value (inclusive)
    pub max: Option<Decimal>,
    /// Interpretation of zero and negative bounds
    pub bound_mode: BoundMode,
    /// Caller rules, run after the built-in checks
    #[serde(skip)]
    pub extensions: Extensions<Decimal>,
}

impl DecimalOptions {
    /// Options with every constraint off.
    pub fn new() -> Self {
        Self::default()
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
    pub fn min(mut self, min: Decimal) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum value.
    pub fn max(mut self, max: Decimal) -> Self {
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
        R: ValidationRule<Decimal> + 'static,
    {
        self.extensions.push(rule);
        self
    }
}

/// Validate a decimal against `options`.
///
/// The bound gate compares against `Decimal::ZERO`: in legacy mode a zero or
/// negative bound is ignored.
pub fn validate_decimal(
    value: Option<&Decimal>,
    options: Option<&DecimalOptions>,
) -> Result<(), RuleError> {
    let Some(opts) = options else {
        return Ok(());
    };
    trace::rejected("decimal", check(value, opts))
}

fn check(value: Option<&Decimal>, opts: &DecimalOptions) -> Result<(), RuleError> {
    let Some(value) = check_presence(value, opts.allow_absent, opts.allow_empty)? else {
        return Ok(());
    };

    let min = opts.bound_mode.active(opts.min.as_ref(), &Decimal::ZERO);
    let max = opts.bound_mode.active(opts.max.as_ref(), &Decimal::ZERO);
    check_bounds(value, min, max, &RANGE)?;

    opts.extensions.run(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Direction, ErrorKind};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn no_options_always_pass() {
        assert!(validate_decimal(None, None).is_ok());
        assert!(validate_decimal(Some(&Decimal::ZERO), None).is_ok());
    }

    #[test]
    fn zero_with_any_scale_is_empty() {
        let opts = DecimalOptions::new();
        let err = validate_decimal(Some(&dec("0.000")), Some(&opts)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
    }

    #[test]
    fn bounds() {
        let opts = DecimalOptions::new().min(dec("1.50")).max(dec("99.99"));
        assert!(validate_decimal(Some(&dec("1.5")), Some(&opts)).is_ok());
        assert!(validate_decimal(Some(&dec("99.99")), Some(&opts)).is_ok());

        let err = validate_decimal(Some(&dec("1.49")), Some(&opts)).unwrap_err();
        assert_eq!(err.direction(), Some(Direction::BelowMinimum));
        assert_eq!(err.interpolate_message(), "is lesser than 1.50 minimum value");

        let err = validate_decimal(Some(&dec("100")), Some(&opts)).unwrap_err();
        assert_eq!(err.direction(), Some(Direction::AboveMaximum));
    }

    #[test]
    fn legacy_mode_skips_non_positive_bounds() {
        let opts = DecimalOptions::new().min(dec("-10"));
        assert!(validate_decimal(Some(&dec("-5")), Some(&opts)).is_ok());
        assert!(validate_decimal(Some(&dec("-50")), Some(&opts)).is_ok());

        let opts = DecimalOptions::new().max(Decimal::ZERO);
        assert!(validate_decimal(Some(&dec("3.14")), Some(&opts)).is_ok());
    }

    #[test]
    fn strict_mode_enforces_non_positive_bounds() {
        let opts = DecimalOptions::new()
            .min(dec("-10"))
            .bound_mode(BoundMode::Strict);
        assert!(validate_decimal(Some(&dec("-5")), Some(&opts)).is_ok());
        assert!(validate_decimal(Some(&dec("-50")), Some(&opts)).is_err());
    }
}
