//! The validation protocol shared by every value kind.
//!
//! Every validator runs the same ordered checks:
//!
//! 1. no options: pass
//! 2. absent subject: `Required`, unless absence is allowed (then pass)
//! 3. zero subject: `Required`, unless emptiness is allowed (then continue)
//! 4. lower bound, then upper bound
//! 5. extensions, in registration order
//!
//! The kind-specific modules supply the zero test and the bound comparisons.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A value with a natural "empty" representation.
pub trait Subject {
    /// Whether this is the kind's zero value (empty string, zero number, zero instant).
    fn is_zero(&self) -> bool;
}

impl Subject for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// How a present bound is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundMode {
    /// A bound only applies when it is greater than the kind's zero.
    ///
    /// A bound of exactly zero, or any negative bound, is ignored.
    #[default]
    Legacy,
    /// Every present bound applies.
    Strict,
}

impl BoundMode {
    /// Return the bound if it should be enforced under this mode.
    pub fn active<'a, T: PartialOrd>(self, bound: Option<&'a T>, zero: &T) -> Option<&'a T> {
        match (self, bound) {
            (_, None) => None,
            (BoundMode::Legacy, Some(b)) if b > zero => Some(b),
            (BoundMode::Legacy, Some(_)) => None,
            (BoundMode::Strict, Some(b)) => Some(b),
        }
    }
}

/// Steps 2 and 3 of the protocol.
///
/// Returns `Ok(None)` when an absent subject is allowed and validation should
/// stop with a pass, `Ok(Some(value))` when the remaining checks should run.
pub(crate) fn check_presence<'a, T>(
    value: Option<&'a T>,
    allow_absent: bool,
    allow_empty: bool,
) -> Result<Option<&'a T>, RuleError>
where
    T: Subject + ?Sized,
{
    let Some(value) = value else {
        if allow_absent {
            return Ok(None);
        }
        return Err(RuleError::required("must be provided (nil)"));
    };

    if value.is_zero() && !allow_empty {
        return Err(RuleError::required("must be provided (empty)"));
    }

    Ok(Some(value))
}

/// Messages and code used for a kind's bound violations.
pub(crate) struct BoundMessages {
    pub code: &'static str,
    pub below: &'static str,
    pub above: &'static str,
}

/// Step 4 of the protocol for ordered values.
///
/// `min` and `max` are the already-activated bounds; an out-of-range error
/// carries the offending bound as the `min`/`max` param.
pub(crate) fn check_bounds<T>(
    value: &T,
    min: Option<&T>,
    max: Option<&T>,
    messages: &BoundMessages,
) -> Result<(), RuleError>
where
    T: PartialOrd + Serialize + fmt::Display + ?Sized,
{
    if let Some(min) = min {
        if value < min {
            return Err(RuleError::below_minimum(messages.code, messages.below)
                .param("min", bound_value(min)));
        }
    }

    if let Some(max) = max {
        if value > max {
            return Err(RuleError::above_maximum(messages.code, messages.above)
                .param("max", bound_value(max)));
        }
    }

    Ok(())
}

// 128-bit integers outside the 64-bit range have no JSON number form.
fn bound_value<T: Serialize + fmt::Display + ?Sized>(bound: &T) -> Value {
    serde_json::to_value(bound).unwrap_or_else(|_| Value::String(bound.to_string()))
}
