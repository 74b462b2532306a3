use bigdecimal::num_traits::ToPrimitive;

use super::{digit_runs, parse_number_text, timestamp_digits};
use crate::value::{Value, format_number};

/// Numeric coercion.
///
/// Sequences and records recurse into their members, drop the NaNs and read
/// the concatenated texts of what is left. A sequence with nothing left is
/// NaN while a record with nothing left is 0.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Undefined => f64::NAN,
        Value::Boolean(b) => if *b { 1.0 } else { 0.0 },
        Value::Number(n) => *n,
        Value::BigInt(b) => b.to_f64().unwrap_or(f64::NAN),
        Value::String(s) => digits_to_number(s),
        Value::Symbol(sym) => sym.description().map_or(f64::NAN, digits_to_number),
        Value::Function(_) | Value::RegExp(_) | Value::Promise => f64::NAN,
        Value::Array(items) => join_numbers(items).unwrap_or(f64::NAN),
        Value::Date(d) => parse_number_text(&timestamp_digits(d)),
        Value::Map(entries) => entries.len() as f64,
        Value::Set(members) => members.len() as f64,
        Value::Object(record) => join_numbers(record.values()).unwrap_or(0.0),
    }
}

fn digits_to_number(text: &str) -> f64 {
    digit_runs(text).map_or(f64::NAN, |digits| parse_number_text(&digits))
}

fn join_numbers<'a, I: IntoIterator<Item = &'a Value>>(values: I) -> Option<f64> {
    let texts: Vec<String> = values
        .into_iter()
        .map(to_number)
        .filter(|n| !n.is_nan())
        .map(format_number)
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(parse_number_text(&texts.concat()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Record};
    use bigdecimal::num_bigint::BigInt;
    use chrono::{TimeZone, Utc};

    #[test]
    fn scalars() {
        assert_eq!(to_number(&Value::Null), 0.0);
        assert!(to_number(&Value::Undefined).is_nan());
        assert_eq!(to_number(&true.into()), 1.0);
        assert_eq!(to_number(&(-3.5).into()), -3.5);
        assert_eq!(to_number(&BigInt::from(42).into()), 42.0);
        assert!(to_number(&Function::new("() => 1").into()).is_nan());
        assert!(to_number(&Value::Promise).is_nan());
    }

    #[test]
    fn text_and_symbols_use_digit_runs() {
        assert_eq!(to_number(&"abc123def".into()), 123.0);
        assert_eq!(to_number(&"12.5kg".into()), 125.0);
        assert!(to_number(&"abc".into()).is_nan());
        assert_eq!(to_number(&Value::symbol("sym123")), 123.0);
        assert!(to_number(&Value::symbol("")).is_nan());
    }

    #[test]
    fn sequences_concatenate_member_texts() {
        let items = Value::Array(vec![1.into(), "2".into(), 3.into()]);
        assert_eq!(to_number(&items), 123.0);
        let fractional = Value::Array(vec![1.5.into(), 2.into()]);
        assert_eq!(to_number(&fractional), 1.52);
        let signed = Value::Array(vec![1.into(), (-2).into()]);
        assert!(to_number(&signed).is_nan());
        assert!(to_number(&Value::Array(vec![])).is_nan());
        assert!(to_number(&Value::Array(vec!["x".into()])).is_nan());
    }

    #[test]
    fn empty_record_is_zero_but_empty_sequence_is_nan() {
        assert_eq!(to_number(&Record::new().into()), 0.0);
        assert_eq!(to_number(&Record::new().with("a", "none").into()), 0.0);
        assert_eq!(to_number(&Record::new().with("a", 1).with("b", "2").into()), 12.0);
    }

    #[test]
    fn dates_maps_and_sets() {
        let d = Utc.with_ymd_and_hms(2025, 9, 6, 23, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(to_number(&d.into()), 20250906230000123.0);
        assert_eq!(to_number(&Value::set(vec![1.into(), 2.into()])), 2.0);
        assert_eq!(to_number(&Value::map(vec![("a".into(), 1.into())])), 1.0);
    }
}
