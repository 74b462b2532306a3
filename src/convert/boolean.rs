use crate::value::Value;

const FALSY_TEXT: [&str; 5] = ["0", "", " ", "false", "-"];

/// Boolean coercion by exclusion: `false`, zero, NaN, any negative number,
/// null, undefined and the texts `"0"`, `""`, `" "`, `"false"`, `"-"` are
/// false. Everything else, empty containers included, is true.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Null | Value::Undefined => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => !(n.is_nan() || *n <= 0.0),
        Value::String(s) => !FALSY_TEXT.contains(&s.as_str()),
        _ => true,
    }
}
