//! Loading option records from JSON documents.
//!
//! ```rust
//! use fieldcheck::config;
//! use fieldcheck::{validate_string, StringOptions};
//!
//! let opts: StringOptions = config::from_json(r#"{"min_length": 3, "no_spaces": true}"#).unwrap();
//! assert!(validate_string(Some("abc"), Some(&opts)).is_ok());
//! assert!(validate_string(Some("a c"), Some(&opts)).is_err());
//! ```
//!
//! Extensions cannot be expressed in a document; register them on the loaded
//! record with `extend`.

use crate::error::ConfigError;
use crate::trace::trace_debug;
use crate::validators::{DecimalOptions, Numeric, NumericOptions, StringOptions, TimeOptions};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::fmt::Display;

/// An options record that can be loaded from configuration.
pub trait LoadOptions: DeserializeOwned {
    /// Record name used in diagnostics.
    const NAME: &'static str;

    /// Reject records whose effective bounds can never be satisfied.
    fn check(&self) -> Result<(), ConfigError>;
}

/// Decode an options record from a JSON string.
pub fn from_json<O: LoadOptions>(input: &str) -> Result<O, ConfigError> {
    let options: O = serde_json::from_str(input)?;
    options.check()?;
    trace_debug!(record = O::NAME, "loaded validation options");
    Ok(options)
}

/// Decode an options record from an already-parsed JSON value.
pub fn from_value<O: LoadOptions>(value: serde_json::Value) -> Result<O, ConfigError> {
    let options: O = serde_json::from_value(value)?;
    options.check()?;
    trace_debug!(record = O::NAME, "loaded validation options");
    Ok(options)
}

fn ordered<T: PartialOrd + Display>(min: Option<&T>, max: Option<&T>) -> Result<(), ConfigError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidBounds {
            min: min.to_string(),
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

impl LoadOptions for StringOptions {
    const NAME: &'static str = "string";

    fn check(&self) -> Result<(), ConfigError> {
        ordered(
            self.bound_mode.active(self.min_length.as_ref(), &0),
            self.bound_mode.active(self.max_length.as_ref(), &0),
        )
    }
}

impl<T: Numeric + DeserializeOwned> LoadOptions for NumericOptions<T> {
    const NAME: &'static str = "numeric";

    fn check(&self) -> Result<(), ConfigError> {
        ordered(
            self.bound_mode.active(self.min.as_ref(), &T::ZERO),
            self.bound_mode.active(self.max.as_ref(), &T::ZERO),
        )
    }
}

impl LoadOptions for DecimalOptions {
    const NAME: &'static str = "decimal";

    fn check(&self) -> Result<(), ConfigError> {
        ordered(
            self.bound_mode.active(self.min.as_ref(), &Decimal::ZERO),
            self.bound_mode.active(self.max.as_ref(), &Decimal::ZERO),
        )
    }
}

impl LoadOptions for TimeOptions {
    const NAME: &'static str = "time";

    fn check(&self) -> Result<(), ConfigError> {
        // Time bounds have no zero gate.
        ordered(self.min.as_ref(), self.max.as_ref())
    }
}
