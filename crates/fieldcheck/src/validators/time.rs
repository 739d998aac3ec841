//! Timestamp validation with optional day-granularity comparison.

use crate::error::RuleError;
use crate::protocol::{check_bounds, check_presence, BoundMessages, Subject};
use crate::trace;
use crate::traits::{Extensions, ValidationRule};
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp type validated by [`validate_time`].
pub type Timestamp = DateTime<FixedOffset>;

const TIME: BoundMessages = BoundMessages {
    code: "range",
    below: "is earlier than {min} minimum time",
    above: "is later than {max} maximum time",
};

// The zero instant is 0001-01-01T00:00:00Z, not the Unix epoch.
impl Subject for Timestamp {
    fn is_zero(&self) -> bool {
        let utc = self.naive_utc();
        utc.year() == 1
            && utc.ordinal() == 1
            && utc.num_seconds_from_midnight() == 0
            && utc.nanosecond() == 0
    }
}

/// Truncate a timestamp to midnight of its day, keeping its offset.
///
/// If local midnight falls outside chrono's representable range (only
/// possible on the first day of that range), the value is returned unchanged.
///
/// ```rust
/// use fieldcheck::{truncate_to_date, Timestamp};
///
/// let t: Timestamp = "2024-01-15T23:00:00+05:00".parse().unwrap();
/// assert_eq!(truncate_to_date(&t).to_rfc3339(), "2024-01-15T00:00:00+05:00");
/// ```
pub fn truncate_to_date(value: &Timestamp) -> Timestamp {
    value
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_local_timezone(*value.offset())
        .single()
        .unwrap_or(*value)
}

/// Constraints for [`validate_time`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeOptions {
    /// Accept an absent value
    pub allow_absent: bool,
    /// Accept the zero instant
    pub allow_empty: bool,
    /// Earliest accepted instant (inclusive)
    pub min: Option<Timestamp>,
    /// Latest accepted instant (inclusive)
    pub max: Option<Timestamp>,
    /// Compare dates only, ignoring the time of day
    pub date_only: bool,
    /// Caller rules, run after the built-in checks
    #[serde(skip)]
    pub extensions: Extensions<Timestamp>,
}

impl TimeOptions {
    /// Options with every constraint off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an absent value.
    pub fn allow_absent(mut self) -> Self {
        self.allow_absent = true;
        self
    }

    /// Accept the zero instant.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Set the earliest accepted instant.
    pub fn min(mut self, min: Timestamp) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the latest accepted instant.
    pub fn max(mut self, max: Timestamp) -> Self {
        self.max = Some(max);
        self
    }

    /// Compare dates only.
    pub fn date_only(mut self) -> Self {
        self.date_only = true;
        self
    }

    /// Register an extension rule.
    pub fn extend<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<Timestamp> + 'static,
    {
        self.extensions.push(rule);
        self
    }
}

/// Validate a timestamp against `options`.
///
/// With `date_only` set, the value and both bounds are truncated to midnight in
/// their own offsets before comparison. Truncation works on copies: neither the
/// value nor `options` is modified, so one `TimeOptions` can be shared across
/// threads. Extensions receive the truncated value.
pub fn validate_time(
    value: Option<&Timestamp>,
    options: Option<&TimeOptions>,
) -> Result<(), RuleError> {
    let Some(opts) = options else {
        return Ok(());
    };
    trace::rejected("time", check(value, opts))
}

/// Validate a timestamp, writing the date truncation back to the caller.
///
/// Behaves like [`validate_time`], except that with `date_only` set the value
/// and the bounds in `options` are replaced by their truncated forms once the
/// presence checks pass. The truncation persists after the call; validating
/// again with the same records gives the same result.
pub fn validate_time_in_place(
    value: Option<&mut Timestamp>,
    options: Option<&mut TimeOptions>,
) -> Result<(), RuleError> {
    let Some(opts) = options else {
        return Ok(());
    };
    trace::rejected("time", check_in_place(value, opts))
}

fn check(value: Option<&Timestamp>, opts: &TimeOptions) -> Result<(), RuleError> {
    let Some(value) = check_presence(value, opts.allow_absent, opts.allow_empty)? else {
        return Ok(());
    };

    let (value, min, max) = if opts.date_only {
        (
            truncate_to_date(value),
            opts.min.as_ref().map(truncate_to_date),
            opts.max.as_ref().map(truncate_to_date),
        )
    } else {
        (*value, opts.min, opts.max)
    };

    check_bounds(&value, min.as_ref(), max.as_ref(), &TIME)?;

    opts.extensions.run(&value)
}

fn check_in_place(value: Option<&mut Timestamp>, opts: &mut TimeOptions) -> Result<(), RuleError> {
    let Some(value) = value else {
        return check(None, opts);
    };
    check_presence(Some(&*value), opts.allow_absent, opts.allow_empty)?;

    if opts.date_only {
        *value = truncate_to_date(value);
        for bound in [&mut opts.min, &mut opts.max].into_iter().flatten() {
            *bound = truncate_to_date(bound);
        }
    }

    check(Some(&*value), opts)
}
