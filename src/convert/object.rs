use crate::value::{Record, Value, iso_string};

/// Key-value mapping coercion.
///
/// Records pass through untouched (custom types keep their name). Sequences
/// and sets are keyed by position, maps by the text form of each key, and
/// anything else is wrapped as `{value: …}`.
pub fn to_object(value: &Value) -> Record {
    match value {
        Value::Null | Value::Undefined => Record::new(),
        Value::Object(record) => record.clone(),
        Value::Array(items) | Value::Set(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        Value::Date(d) => Record::new().with("value", iso_string(d)),
        Value::Map(entries) => entries_to_record(entries),
        Value::RegExp(_) | Value::Promise => Record::new().with("value", value.to_string()),
        _ => Record::new().with("value", value.clone()),
    }
}

/// Map entries as record properties; a later key overwrites an earlier key
/// with the same text form.
pub(crate) fn entries_to_record(entries: &[(Value, Value)]) -> Record {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
