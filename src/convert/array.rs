use lazy_static::lazy_static;
use regex::Regex;

use crate::value::{Value, iso_string};

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[ ,]+").unwrap();
}

/// Ordered-sequence coercion.
pub fn to_array(value: &Value) -> Vec<Value> {
    match value {
        Value::Null | Value::Undefined => Vec::new(),
        Value::String(s) if s.contains([' ', ',']) => SEPARATORS
            .split(s)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Value::from)
            .collect(),
        Value::String(_) | Value::Number(_) | Value::BigInt(_) | Value::Boolean(_) => {
            vec![value.clone()]
        }
        Value::Symbol(_) | Value::Function(_) | Value::RegExp(_) => {
            vec![Value::String(value.to_string())]
        }
        Value::Array(items) => items.clone(),
        Value::Date(d) => vec![Value::String(iso_string(d))],
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| Value::Array(vec![k.clone(), v.clone()]))
            .collect(),
        Value::Set(members) => members.clone(),
        Value::Object(record) => record.values().cloned().collect(),
        // a pending computation has no own values
        Value::Promise => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::value::{Function, Record};
    use bigdecimal::num_bigint::BigInt;
    use chrono::{TimeZone, Utc};

    #[test]
    fn text_splits_on_spaces_and_commas() {
        assert_eq!(to_array(&"a,b c".into()), vec![Value::from("a"), "b".into(), "c".into()]);
        assert_eq!(to_array(&" a ,, b ".into()), vec![Value::from("a"), "b".into()]);
        assert_eq!(to_array(&"single".into()), vec![Value::from("single")]);
        assert_eq!(to_array(&",".into()), Vec::<Value>::new());
    }

    #[test]
    fn scalars_wrap() {
        assert_eq!(to_array(&Value::Null), Vec::<Value>::new());
        assert_eq!(to_array(&123.into()), vec![Value::from(123)]);
        assert_eq!(to_array(&BigInt::from(7).into()), vec![Value::from(BigInt::from(7))]);
        assert_eq!(to_array(&false.into()), vec![Value::from(false)]);
        assert_eq!(to_array(&Value::symbol("s")), vec![Value::from("Symbol(s)")]);
        assert_eq!(to_array(&Function::new("() => 1").into()), vec![Value::from("() => 1")]);
        let p = Pattern::new("x", "g").unwrap();
        assert_eq!(to_array(&p.into()), vec![Value::from("/x/g")]);
        let d = Utc.with_ymd_and_hms(2025, 9, 6, 0, 0, 0).unwrap();
        assert_eq!(to_array(&d.into()), vec![Value::from("2025-09-06T00:00:00.000Z")]);
    }

    #[test]
    fn compounds_list_their_members() {
        let items = vec![Value::from(1), "two".into()];
        assert_eq!(to_array(&Value::Array(items.clone())), items);
        assert_eq!(to_array(&Value::set(vec![1.into(), 2.into()])), vec![Value::from(1), 2.into()]);
        assert_eq!(
            to_array(&Value::map(vec![("k".into(), 1.into())])),
            vec![Value::Array(vec!["k".into(), 1.into()])]
        );
        assert_eq!(
            to_array(&Record::new().with("a", 1).with("b", 2).into()),
            vec![Value::from(1), 2.into()]
        );
    }
}
