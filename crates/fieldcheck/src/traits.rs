//! The extension seam: caller-supplied rules that run after the built-in checks.

use crate::error::RuleError;
use std::fmt;
use std::sync::Arc;

/// Trait for individual validation rules.
///
/// Each rule validates a single value and returns a `RuleError` on failure.
/// Rules registered on an options record run after every built-in check has
/// passed, in registration order.
///
/// ## Example
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// #[derive(Debug)]
/// struct EvenRule;
///
/// impl ValidationRule<i32> for EvenRule {
///     fn validate(&self, value: &i32) -> Result<(), RuleError> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err(RuleError::extension("even", "must be even"))
///         }
///     }
///
///     fn rule_name(&self) -> &'static str {
///         "even"
///     }
/// }
///
/// let opts = NumericOptions::<i32>::new().extend(EvenRule);
/// assert!(validate_numeric(Some(&4), Some(&opts)).is_ok());
/// assert!(validate_numeric(Some(&5), Some(&opts)).is_err());
/// ```
pub trait ValidationRule<T: ?Sized>: fmt::Debug + Send + Sync {
    /// Validate the value against this rule.
    fn validate(&self, value: &T) -> Result<(), RuleError>;

    /// Get the rule name/code for error reporting.
    fn rule_name(&self) -> &'static str;
}

/// Type alias for boxed rule closures.
type RuleFn<T> = Box<dyn Fn(&T) -> Result<(), RuleError> + Send + Sync>;

/// Adapts a closure into a [`ValidationRule`].
pub struct FnRule<T: ?Sized> {
    name: &'static str,
    check: RuleFn<T>,
}

impl<T: ?Sized> FnRule<T> {
    /// Wrap `check` under the given rule name.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), RuleError> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Box::new(check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FnRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl<T: ?Sized> ValidationRule<T> for FnRule<T> {
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        (self.check)(value)
    }

    fn rule_name(&self) -> &'static str {
        self.name
    }
}

/// Ordered list of extension rules attached to an options record.
pub struct Extensions<T: ?Sized> {
    rules: Vec<Arc<dyn ValidationRule<T>>>,
}

impl<T: ?Sized> Extensions<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    pub fn push<R>(&mut self, rule: R)
    where
        R: ValidationRule<T> + 'static,
    {
        self.rules.push(Arc::new(rule));
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order, stopping at the first failure.
    pub fn run(&self, value: &T) -> Result<(), RuleError> {
        for rule in &self.rules {
            rule.validate(value)?;
        }
        Ok(())
    }

    /// Names of the registered rules, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule_name()).collect()
    }
}

impl<T: ?Sized> Default for Extensions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Extensions<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Extensions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}
