use crate::value::{Value, format_number, iso_string};

/// Text coercion. Compounds are rendered recursively in a readable form:
/// `[1, 2]`, `{a: 1}`, `Map {k => v}`, `Set {v}`.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Undefined => String::from("undefined"),
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Boolean(b) => b.to_string(),
        Value::BigInt(b) => b.to_string(),
        Value::Symbol(sym) => sym.to_string(),
        Value::Array(items) => format!("[{}]", join(items.iter().map(to_text))),
        Value::Date(d) => iso_string(d),
        Value::RegExp(p) => p.to_string(),
        Value::Map(entries) => format!(
            "Map {{{}}}",
            join(entries.iter().map(|(k, v)| format!("{} => {}", to_text(k), to_text(v))))
        ),
        Value::Set(members) => format!("Set {{{}}}", join(members.iter().map(to_text))),
        Value::Promise => String::from("Promise { <pending> }"),
        Value::Function(func) => func.source().to_string(),
        Value::Object(record) => format!(
            "{{{}}}",
            join(record.iter().map(|(k, v)| format!("{}: {}", k, to_text(v))))
        ),
    }
}

fn join<I: Iterator<Item = String>>(parts: I) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
