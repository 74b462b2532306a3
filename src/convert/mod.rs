//! The eight converters. Each one is total: input it cannot represent
//! degrades to that target's empty value (0, NaN, absent, empty) instead of
//! failing.
//!
//! Numeric and big-integer coercion share one trick: text is reduced to the
//! concatenation of its digit runs, so `"a1b22"` reads as `122`. Arrays,
//! records, dates and symbols reach the same rule through recursion.

mod array;
mod bigint;
mod boolean;
mod date;
mod number;
mod object;
mod regexp;
mod string;

pub use array::to_array;
pub use bigint::to_bigint;
pub use boolean::to_boolean;
pub use date::{parse_date_text, to_date};
pub use number::to_number;
pub use object::to_object;
pub use regexp::{to_regexp, to_regexp_with};
pub use string::to_text;

use chrono::{DateTime, Datelike, Timelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUNS: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Concatenation of every run of ASCII digits in `text`, or `None` when
/// there is none.
pub(crate) fn digit_runs(text: &str) -> Option<String> {
    let joined: String = DIGIT_RUNS.find_iter(text).map(|m| m.as_str()).collect();
    if joined.is_empty() { None } else { Some(joined) }
}

/// `YYYYMMDDHHMMSSmmm` in UTC.
pub(crate) fn timestamp_digits(d: &DateTime<Utc>) -> String {
    format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}{:03}",
        d.year(),
        d.month(),
        d.day(),
        d.hour(),
        d.minute(),
        d.second(),
        d.timestamp_subsec_millis() % 1000
    )
}

/// Reads text as a number: surrounding whitespace is ignored, empty text is
/// 0, `Infinity` is accepted, anything that is not plain decimal or
/// exponent syntax is NaN.
pub(crate) fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}
