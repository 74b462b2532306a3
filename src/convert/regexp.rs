use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::object::entries_to_record;
use crate::pattern::{Pattern, PatternOptions, escape};
use crate::value::{Value, iso_string};

lazy_static! {
    static ref LITERAL: Regex = Regex::new(r"^/(.+)/([gimsuy]*)$").unwrap();
}

/// Pattern coercion with the default flag options (`global`, `ignore_case`).
pub fn to_regexp(value: &Value) -> Pattern {
    to_regexp_with(value, &PatternOptions::default())
}

/// Pattern coercion.
///
/// Text in literal form (`/body/flags`) is taken verbatim; every other value
/// is reduced to text and escaped. When the value carried no flags of its
/// own, `options` supplies them. Text that does not compile yields `/^$/`.
pub fn to_regexp_with(value: &Value, options: &PatternOptions) -> Pattern {
    if let Value::RegExp(p) = value {
        return p.clone();
    }
    let (source, flags) = match value {
        Value::String(s) => match LITERAL.captures(s) {
            Some(literal) => (literal[1].to_string(), literal[2].to_string()),
            None => (escape(s), String::new()),
        },
        Value::Null | Value::Undefined => (String::new(), String::new()),
        Value::Array(items) => {
            let joined: String = items.iter().map(Value::to_string).collect();
            (escape(&joined), String::new())
        }
        Value::Date(d) => (escape(&iso_string(d)), String::new()),
        Value::Map(entries) => {
            let record = Value::Object(entries_to_record(entries));
            (escape(&json_text(&record)), String::new())
        }
        Value::Set(members) => {
            let list = Value::Array(members.clone());
            (escape(&json_text(&list)), String::new())
        }
        _ => (escape(&value.to_string()), String::new()),
    };
    let flags = if flags.is_empty() { options.flags() } else { flags };
    match Pattern::new(&source, &flags) {
        Ok(pattern) => pattern,
        Err(e) => {
            debug!(%source, %flags, error=%e, "pattern does not compile, using /^$/");
            Pattern::empty_match()
        }
    }
}

fn json_text(value: &Value) -> String {
    value.to_json().map(|json| json.to_string()).unwrap_or_default()
}
