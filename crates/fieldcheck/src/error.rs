//! Error types returned by the validators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which bound a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The value is below the lower bound.
    BelowMinimum,
    /// The value is above the upper bound.
    AboveMaximum,
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value is absent or empty and that is not permitted.
    Required,
    /// The value violates a lower or upper bound.
    OutOfRange(Direction),
    /// The value does not have the required shape (address grammar, spaces).
    Format,
    /// A caller-supplied rule rejected the value.
    Extension,
}

/// Error from a single validation call.
///
/// Validators are fail-fast, so a call never produces more than one of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleError {
    /// Failure category
    pub kind: ErrorKind,
    /// The rule code (e.g., "required", "length", "range", "email")
    pub code: String,
    /// Human-readable error message, may contain `{param}` placeholders
    pub message: String,
    /// Optional parameters for message interpolation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// A missing or empty value.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, "required", message)
    }

    /// A value below its lower bound.
    pub fn below_minimum(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange(Direction::BelowMinimum), code, message)
    }

    /// A value above its upper bound.
    pub fn above_maximum(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange(Direction::AboveMaximum), code, message)
    }

    /// A value with the wrong shape.
    pub fn format(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, code, message)
    }

    /// A failure reported by a caller-supplied rule.
    pub fn extension(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Extension, code, message)
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }

    /// The violated bound direction, if this is an out-of-range error.
    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            ErrorKind::OutOfRange(direction) => Some(direction),
            _ => None,
        }
    }

    /// Interpolate parameters into the message.
    ///
    /// Replaces `{param_name}` placeholders with actual values.
    pub fn interpolate_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            let placeholder = format!("{{{}}}", key);
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => value.to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }
        result
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.interpolate_message())
    }
}

impl std::error::Error for RuleError {}

/// Errors raised while loading option records from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the record shape.
    #[error("invalid options document: {0}")]
    Json(#[from] serde_json::Error),

    /// The lower bound is greater than the upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// Lower bound as written
        min: String,
        /// Upper bound as written
        max: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_error_creation() {
        let error = RuleError::format("email", "is an invalid email address");
        assert_eq!(error.kind, ErrorKind::Format);
        assert_eq!(error.code, "email");
        assert!(error.params.is_empty());
        assert_eq!(error.direction(), None);
    }

    #[test]
    fn rule_error_interpolates_params() {
        let error = RuleError::below_minimum("length", "is shorter than {min} characters")
            .param("min", 3);

        assert_eq!(error.interpolate_message(), "is shorter than 3 characters");
        assert_eq!(error.to_string(), "[length] is shorter than 3 characters");
        assert_eq!(error.direction(), Some(Direction::BelowMinimum));
    }

    #[test]
    fn rule_error_serializes_kind() {
        let error = RuleError::above_maximum("range", "too big").param("max", 10);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["kind"]["out_of_range"], "above_maximum");
        assert_eq!(json["params"]["max"], 10);

        let parsed: RuleError = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, error);
    }

    #[test]
    fn config_error_display() {
        let error = ConfigError::InvalidBounds {
            min: "5".into(),
            max: "1".into(),
        };
        assert_eq!(error.to_string(), "invalid bounds: min 5 is greater than max 1");
    }
}
