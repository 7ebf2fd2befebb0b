//! Form input handling.
//!
//! Converts untrusted form field values into calculator inputs. Malformed
//! numbers are coerced to zero here so the calculator only ever sees
//! well-formed, non-negative values.

mod parse;
mod request;

pub use parse::{
    MAX_AMOUNT, MAX_COUNT, MAX_DAYS_PER_WEEK, clamp_amount, clamp_count, clamp_days, parse_amount,
    parse_count, parse_days, parse_months,
};
pub use request::{FormRequest, RawForm};
