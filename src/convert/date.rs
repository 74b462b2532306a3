use bigdecimal::num_traits::ToPrimitive;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::value::Value;

/// Largest distance from the epoch a timestamp may have, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// The runtime's own `toString` layout, once the zone name is dropped.
const RUNTIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

const NAIVE_FORMATS: [&str; 12] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

lazy_static! {
    static ref YEAR_MONTH: Regex = Regex::new(r"^([0-9]{4})(?:-([0-9]{2}))?$").unwrap();
    static ref ZONE_NAME: Regex = Regex::new(r"\s*\([^)]*\)$").unwrap();
}

/// Point-in-time coercion; `None` when the value names no valid moment.
pub fn to_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(d) => Some(*d),
        Value::Number(n) => from_epoch_millis(*n),
        Value::BigInt(b) => from_epoch_millis(b.to_f64().unwrap_or(f64::NAN)),
        Value::Boolean(b) => from_epoch_millis(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_date_text(s),
        _ => None,
    }
}

fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

/// Parses calendar text. Accepts RFC 3339, RFC 2822, the runtime's
/// `toString` layout (`Sat Sep 06 2025 00:00:00 GMT+0000 (…)`), `YYYY`,
/// `YYYY-MM`, ISO-like and slashed dates (`2025/09/06`, `09/06/2025`) and
/// month names (`Sep 6, 2025`, `6 September 2025`), each optionally followed
/// by a time of day. Text without an offset is read as UTC.
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(text) {
        return Some(d.with_timezone(&Utc));
    }
    if let Ok(d) = DateTime::parse_from_rfc2822(text) {
        return Some(d.with_timezone(&Utc));
    }
    let unnamed = ZONE_NAME.replace(text, "");
    if let Ok(d) = DateTime::parse_from_str(&unnamed, RUNTIME_FORMAT) {
        return Some(d.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    let captures = YEAR_MONTH.captures(text)?;
    let year = captures[1].parse::<i32>().ok()?;
    let month = match captures.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}
