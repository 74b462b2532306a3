//! Coercion dispatch.
//!
//! The registry is a process-wide table from target name to converter,
//! built once and never mutated. [`to_type`] either runs one converter or
//! all of them, in registry order.

use bigdecimal::num_bigint::BigInt;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use tracing::{trace, warn};

use std::fmt;
use std::str::FromStr;

use crate::convert::{
    to_array, to_bigint, to_boolean, to_date, to_number, to_object, to_regexp, to_regexp_with,
    to_text,
};
use crate::error::{Result, TypewiseError};
use crate::pattern::{Pattern, PatternOptions};
use crate::value::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Number,
    BigInt,
    Boolean,
    String,
    Array,
    Date,
    Object,
    RegExp,
}

impl Target {
    /// Every target, in registry order.
    pub const ALL: [Target; 8] = [
        Target::Number,
        Target::BigInt,
        Target::Boolean,
        Target::String,
        Target::Array,
        Target::Date,
        Target::Object,
        Target::RegExp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Number => "number",
            Target::BigInt => "bigint",
            Target::Boolean => "boolean",
            Target::String => "string",
            Target::Array => "array",
            Target::Date => "date",
            Target::Object => "object",
            Target::RegExp => "regexp",
        }
    }
}
impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for Target {
    type Err = TypewiseError;
    fn from_str(name: &str) -> Result<Target> {
        Target::ALL
            .into_iter()
            .find(|target| target.name() == name)
            .ok_or_else(|| TypewiseError::UnknownType(name.to_string()))
    }
}

/// The result of one converter.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Number(f64),
    BigInt(BigInt),
    Boolean(bool),
    String(String),
    Array(Vec<Value>),
    /// `None` when the input names no valid moment.
    Date(Option<DateTime<Utc>>),
    Object(Record),
    RegExp(Pattern),
}

impl Coerced {
    pub fn target(&self) -> Target {
        match self {
            Coerced::Number(_) => Target::Number,
            Coerced::BigInt(_) => Target::BigInt,
            Coerced::Boolean(_) => Target::Boolean,
            Coerced::String(_) => Target::String,
            Coerced::Array(_) => Target::Array,
            Coerced::Date(_) => Target::Date,
            Coerced::Object(_) => Target::Object,
            Coerced::RegExp(_) => Target::RegExp,
        }
    }
    /// Back into the dynamic model; an absent moment becomes `Null`.
    pub fn into_value(self) -> Value {
        match self {
            Coerced::Number(n) => Value::Number(n),
            Coerced::BigInt(b) => Value::BigInt(b),
            Coerced::Boolean(b) => Value::Boolean(b),
            Coerced::String(s) => Value::String(s),
            Coerced::Array(items) => Value::Array(items),
            Coerced::Date(d) => d.map_or(Value::Null, Value::Date),
            Coerced::Object(record) => Value::Object(record),
            Coerced::RegExp(p) => Value::RegExp(p),
        }
    }
}
impl From<Coerced> for Value {
    fn from(c: Coerced) -> Self {
        c.into_value()
    }
}

pub type Converter = fn(&Value) -> Coerced;

fn number(value: &Value) -> Coerced { Coerced::Number(to_number(value)) }
fn bigint(value: &Value) -> Coerced { Coerced::BigInt(to_bigint(value)) }
fn boolean(value: &Value) -> Coerced { Coerced::Boolean(to_boolean(value)) }
fn string(value: &Value) -> Coerced { Coerced::String(to_text(value)) }
fn array(value: &Value) -> Coerced { Coerced::Array(to_array(value)) }
fn date(value: &Value) -> Coerced { Coerced::Date(to_date(value)) }
fn object(value: &Value) -> Coerced { Coerced::Object(to_object(value)) }
fn regexp(value: &Value) -> Coerced { Coerced::RegExp(to_regexp(value)) }

pub struct CoercionRegistry {
    converters: [(Target, Converter); 8],
}

lazy_static! {
    static ref REGISTRY: CoercionRegistry = CoercionRegistry::builtin();
}

impl CoercionRegistry {
    fn builtin() -> Self {
        // same order as Target::ALL, so a target's discriminant is its slot
        Self {
            converters: [
                (Target::Number, number as Converter),
                (Target::BigInt, bigint as Converter),
                (Target::Boolean, boolean as Converter),
                (Target::String, string as Converter),
                (Target::Array, array as Converter),
                (Target::Date, date as Converter),
                (Target::Object, object as Converter),
                (Target::RegExp, regexp as Converter),
            ],
        }
    }
    pub fn global() -> &'static CoercionRegistry {
        &REGISTRY
    }
    pub fn get(&self, target: Target) -> Converter {
        self.converters[target as usize].1
    }
    pub fn lookup(&self, name: &str) -> Result<Converter> {
        Ok(self.get(name.parse::<Target>()?))
    }
    pub fn iter(&self) -> impl Iterator<Item = (Target, Converter)> + '_ {
        self.converters.iter().copied()
    }
    pub fn len(&self) -> usize {
        self.converters.len()
    }
}

/// Runs the converter for `target`.
pub fn coerce(value: &Value, target: Target) -> Coerced {
    coerce_with(value, target, &PatternOptions::default())
}

/// Runs every converter, in registry order.
pub fn coerce_all(value: &Value) -> Vec<(Target, Coerced)> {
    coerce_all_with(value, &PatternOptions::default())
}

pub(crate) fn coerce_with(value: &Value, target: Target, options: &PatternOptions) -> Coerced {
    trace!(to = %target, "coercing");
    match target {
        Target::RegExp => Coerced::RegExp(to_regexp_with(value, options)),
        _ => REGISTRY.get(target)(value),
    }
}

pub(crate) fn coerce_all_with(value: &Value, options: &PatternOptions) -> Vec<(Target, Coerced)> {
    REGISTRY
        .iter()
        .map(|(target, _)| (target, coerce_with(value, target, options)))
        .collect()
}

/// Converts `value` to the target called `target`, or to every target when
/// `target` is `None` or empty. The all-targets form is a record keyed by
/// target name.
pub fn to_type(value: &Value, target: Option<&str>) -> Result<Value> {
    to_type_with(value, target, &PatternOptions::default())
}

pub(crate) fn to_type_with(value: &Value, target: Option<&str>, options: &PatternOptions) -> Result<Value> {
    match target.filter(|name| !name.is_empty()) {
        Some(name) => {
            let target = name.parse::<Target>().inspect_err(|_| {
                warn!(target_name = name, "unknown coercion target");
            })?;
            Ok(coerce_with(value, target, options).into_value())
        }
        None => Ok(Value::Object(
            coerce_all_with(value, options)
                .into_iter()
                .map(|(target, coerced)| (target.name(), coerced.into_value()))
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_every_target_in_order() {
        let registry = CoercionRegistry::global();
        assert_eq!(registry.len(), 8);
        let names: Vec<&str> = registry.iter().map(|(t, _)| t.name()).collect();
        assert_eq!(
            names,
            vec!["number", "bigint", "boolean", "string", "array", "date", "object", "regexp"]
        );
    }

    #[test]
    fn lookup_by_name() {
        let converter = CoercionRegistry::global().lookup("number").unwrap();
        assert_eq!(converter(&"123abc".into()), Coerced::Number(123.0));
        assert_eq!(
            CoercionRegistry::global().lookup("Number").err(),
            Some(TypewiseError::UnknownType(String::from("Number")))
        );
    }

    #[test]
    fn coerced_knows_its_target() {
        for (target, coerced) in coerce_all(&Value::Null) {
            assert_eq!(coerced.target(), target);
        }
    }

    #[test]
    fn absent_date_becomes_null() {
        assert_eq!(to_type(&"nope".into(), Some("date")), Ok(Value::Null));
    }

    #[test]
    fn empty_target_means_all() {
        match to_type(&1.into(), Some("")).unwrap() {
            Value::Object(record) => assert_eq!(record.len(), 8),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn options_reach_the_pattern_converter() {
        let options = PatternOptions { global: false, ignore_case: false, multiline: false };
        match coerce_with(&"x".into(), Target::RegExp, &options) {
            Coerced::RegExp(p) => assert_eq!(p.flags(), ""),
            other => panic!("unexpected {:?}", other),
        }
    }
}
