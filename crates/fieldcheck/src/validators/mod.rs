//! One validator per value kind, plus the address-format check.

mod decimal;
mod email;
mod numeric;
mod string;
mod time;

pub use decimal::{validate_decimal, DecimalOptions};
pub use email::validate_email;
pub use numeric::{validate_numeric, Numeric, NumericOptions};
pub use string::{validate_string, StringOptions};
pub use time::{truncate_to_date, validate_time, validate_time_in_place, TimeOptions, Timestamp};
