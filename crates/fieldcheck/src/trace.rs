//! Conditional tracing macros
//!
//! These macros wrap tracing calls so the crate compiles without the `tracing`
//! feature. Without it they expand to nothing and the library never logs.

/// Log at debug level, only when tracing feature is enabled
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

/// Log at debug level, no-op when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Log at trace level, only when tracing feature is enabled
#[cfg(feature = "tracing")]
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

/// Log at trace level, no-op when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
macro_rules! trace_trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_debug;
pub(crate) use trace_trace;

/// Emit a trace event for a failed validation and pass the result through.
pub(crate) fn rejected<T>(
    _validator: &'static str,
    result: Result<T, crate::error::RuleError>,
) -> Result<T, crate::error::RuleError> {
    if let Err(ref _err) = result {
        trace_trace!(
            validator = _validator,
            code = %_err.code,
            kind = ?_err.kind,
            "value rejected"
        );
    }
    result
}
