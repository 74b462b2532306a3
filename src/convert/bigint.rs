use bigdecimal::num_bigint::BigInt;
use bigdecimal::num_traits::{FromPrimitive, Zero};

use super::{digit_runs, timestamp_digits};
use crate::value::Value;

/// Big-integer coercion. Mirrors [`super::to_number`] with 0 as the
/// fallback for everything that has no integer reading.
pub fn to_bigint(value: &Value) -> BigInt {
    match value {
        Value::Null | Value::Undefined => BigInt::zero(),
        Value::Boolean(b) => BigInt::from(u8::from(*b)),
        Value::Number(n) => BigInt::from_f64(n.floor()).unwrap_or_default(),
        Value::BigInt(b) => b.clone(),
        Value::String(s) => digits_to_bigint(s),
        Value::Symbol(sym) => sym.description().map_or_else(BigInt::zero, digits_to_bigint),
        Value::Array(items) => join_bigints(items),
        Value::Date(d) => parse_bigint(&timestamp_digits(d)),
        Value::Object(record) => join_bigints(record.values()),
        // no own enumerable values
        Value::Function(_) | Value::RegExp(_) | Value::Map(_) | Value::Set(_) | Value::Promise => {
            BigInt::zero()
        }
    }
}

fn digits_to_bigint(text: &str) -> BigInt {
    digit_runs(text).map_or_else(BigInt::zero, |digits| parse_bigint(&digits))
}

fn join_bigints<'a, I: IntoIterator<Item = &'a Value>>(values: I) -> BigInt {
    let joined: String = values.into_iter().map(|v| to_bigint(v).to_string()).collect();
    if joined.is_empty() { BigInt::zero() } else { parse_bigint(&joined) }
}

// "1-2" and friends have no integer reading
fn parse_bigint(text: &str) -> BigInt {
    text.parse::<BigInt>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;
    use chrono::{TimeZone, Utc};

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn scalars() {
        assert_eq!(to_bigint(&Value::Null), big(0));
        assert_eq!(to_bigint(&Value::Undefined), big(0));
        assert_eq!(to_bigint(&true.into()), big(1));
        assert_eq!(to_bigint(&123.45.into()), big(123));
        assert_eq!(to_bigint(&(-1.5).into()), big(-2));
        assert_eq!(to_bigint(&f64::NAN.into()), big(0));
        assert_eq!(to_bigint(&f64::INFINITY.into()), big(0));
    }

    #[test]
    fn text_keeps_every_digit() {
        assert_eq!(to_bigint(&"abc123def".into()), big(123));
        assert_eq!(to_bigint(&"-5".into()), big(5));
        assert_eq!(to_bigint(&"none".into()), big(0));
        let long = "id 123456789 / 123456789 / 123456789";
        assert_eq!(
            to_bigint(&long.into()),
            "123456789123456789123456789".parse::<BigInt>().unwrap()
        );
        assert_eq!(to_bigint(&Value::symbol("sym123")), big(123));
    }

    #[test]
    fn compounds() {
        let items = Value::Array(vec![1.into(), "2".into(), 3.into()]);
        assert_eq!(to_bigint(&items), big(123));
        assert_eq!(to_bigint(&Value::Array(vec![])), big(0));
        assert_eq!(to_bigint(&Value::Array(vec![(-1).into(), 2.into()])), big(-12));
        assert_eq!(to_bigint(&Value::Array(vec![1.into(), (-2).into()])), big(0));
        assert_eq!(to_bigint(&Record::new().with("a", 1).with("b", "2").into()), big(12));
        assert_eq!(to_bigint(&Value::set(vec![7.into()])), big(0));
    }

    #[test]
    fn dates() {
        let d = Utc.with_ymd_and_hms(2025, 9, 6, 23, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(to_bigint(&d.into()), big(20250906230000123));
    }
}
