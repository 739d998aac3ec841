//! # fieldcheck
//!
//! Fail-fast validation of single field values against declarative options.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let username = StringOptions::new().min_length(3).max_length(20).no_spaces();
//! assert!(validate_string(Some("ferris"), Some(&username)).is_ok());
//!
//! let err = validate_string(Some("f"), Some(&username)).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::OutOfRange(Direction::BelowMinimum));
//!
//! let age = NumericOptions::new().min(18u8).max(120);
//! assert!(validate_numeric(Some(&42), Some(&age)).is_ok());
//!
//! assert!(validate_email(Some("ferris@example.com")).is_ok());
//! ```
//!
//! ## Check order
//!
//! Every option-driven validator runs the same sequence and stops at the first
//! failure:
//!
//! - no options: the value is valid
//! - absent value: `Required`, unless `allow_absent` (then valid)
//! - zero value (empty string, `0`, zero decimal, `0001-01-01T00:00:00Z`):
//!   `Required`, unless `allow_empty`; an allowed zero value still goes
//!   through the bound checks
//! - lower bound, then upper bound: `OutOfRange`
//! - kind extras (`no_spaces` for strings): `Format`
//! - extensions, in registration order
//!
//! ## Bound modes
//!
//! String, numeric and decimal bounds default to [`BoundMode::Legacy`], where
//! a bound only applies when it is greater than zero. [`BoundMode::Strict`]
//! applies every bound that is set.
//!
//! ## Features
//!
//! - `tracing`: emit `trace` events for rejected values and `debug` events
//!   when options are loaded from configuration.

pub mod config;
mod error;
mod protocol;
mod rules;
mod trace;
mod traits;
mod validators;

pub use error::{ConfigError, Direction, ErrorKind, RuleError};
pub use protocol::{BoundMode, Subject};
pub use rules::{EmailRule, EMAIL_PATTERN};
pub use traits::{Extensions, FnRule, ValidationRule};
pub use validators::{
    truncate_to_date, validate_decimal, validate_email, validate_numeric, validate_string,
    validate_time, validate_time_in_place, DecimalOptions, Numeric, NumericOptions, StringOptions,
    TimeOptions, Timestamp,
};

/// Re-exported so callers can name the decimal type without a direct dependency.
pub use rust_decimal::Decimal;

/// Prelude module for validation
pub mod prelude {
    pub use crate::error::{Direction, ErrorKind, RuleError};
    pub use crate::protocol::BoundMode;
    pub use crate::rules::EmailRule;
    pub use crate::traits::{FnRule, ValidationRule};
    pub use crate::validators::{
        validate_decimal, validate_email, validate_numeric, validate_string, validate_time,
        DecimalOptions, NumericOptions, StringOptions, TimeOptions, Timestamp,
    };
}
