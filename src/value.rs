//! The closed value model every other module works on.
//!
//! A [`Value`] is one of a fixed set of variants covering everything a
//! dynamic runtime can hand us: the scalars, the three function flavours,
//! ordered sequences, string-keyed records, timestamps, patterns, keyed
//! maps, sets and pending computations. Records carry an optional declared
//! type name, which is what the tagger reports for custom structured types.

// used for arbitrary precision integers
use bigdecimal::num_bigint::BigInt;
// used for timestamps
use chrono::{DateTime, SecondsFormat, Utc};
// used to render maps and sets as JSON text
use serde_json::Value as Json;

// used to print out readable forms of a value
use std::fmt;

use crate::pattern::Pattern;

/// The flavour of a callable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Plain,
    Async,
    Generator,
    AsyncGenerator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    kind: FunctionKind,
    name: Option<String>,
    source: String,
}

impl Function {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self { kind: FunctionKind::Plain, name: None, source: source.into() }
    }
    pub fn asynchronous<S: Into<String>>(source: S) -> Self {
        Self { kind: FunctionKind::Async, ..Self::new(source) }
    }
    pub fn generator<S: Into<String>>(source: S) -> Self {
        Self { kind: FunctionKind::Generator, ..Self::new(source) }
    }
    pub fn async_generator<S: Into<String>>(source: S) -> Self {
        Self { kind: FunctionKind::AsyncGenerator, ..Self::new(source) }
    }
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// The source text, which is also the function's textual form.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self { description: Some(description.into()) }
    }
    pub fn anonymous() -> Self {
        Self { description: None }
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// A string-keyed record.
///
/// `type_name` stands in for the constructing type of a structured value:
/// `None` (or `"Object"`) is a plain record, anything else is a custom type
/// such as `User`. Entries iterate in property order: integer-like keys
/// ascending, then the remaining keys in insertion order. Equality ignores
/// that order.
#[derive(Debug, Clone, Default)]
pub struct Record {
    type_name: Option<String>,
    entries: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn named<S: Into<String>>(type_name: S) -> Self {
        Self { type_name: Some(type_name.into()), entries: Vec::new() }
    }
    /// Builder form of [`Record::insert`].
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
    /// Assigns `key`, overwriting an existing entry in place.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }
        match array_index(&key) {
            Some(index) => {
                let at = self
                    .entries
                    .iter()
                    .position(|(k, _)| array_index(k).is_none_or(|other| other > index))
                    .unwrap_or(self.entries.len());
                self.entries.insert(at, (key, value));
            }
            None => self.entries.push((key, value)),
        }
    }
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

// canonical decimal text of an integer below 2^32 - 1
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Boolean(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Vec<Value>),
    Object(Record),
    Date(DateTime<Utc>),
    RegExp(Pattern),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    /// A computation whose result is not available yet.
    Promise,
}

impl Value {
    /// Builds a keyed map. Keys are compared with SameValueZero and a repeated
    /// key overwrites the earlier entry in place.
    pub fn map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        let mut kept: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match kept.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(entry) => entry.1 = value,
                None => kept.push((key, value)),
            }
        }
        Value::Map(kept)
    }

    /// Builds a set, dropping repeated members (SameValueZero).
    pub fn set<I: IntoIterator<Item = Value>>(members: I) -> Self {
        let mut kept: Vec<Value> = Vec::new();
        for member in members {
            if !kept.iter().any(|m| m.same_value_zero(&member)) {
                kept.push(member);
            }
        }
        Value::Set(kept)
    }

    pub fn symbol<S: Into<String>>(description: S) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Equality where NaN equals NaN and the two zeros are equal.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (a, b) => a == b,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The built-in structural tag, before custom record names and function
    /// flavours are taken into account.
    pub fn structural_tag(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Promise => "promise",
        }
    }

    /// JSON rendering with `JSON.stringify` rules. `None` means the value has
    /// no JSON form at all (undefined, functions, symbols).
    pub fn to_json(&self) -> Option<Json> {
        Some(match self {
            Value::Undefined | Value::Function(_) | Value::Symbol(_) => return None,
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Number(n) => json_number(*n),
            // JSON has no big integer form
            Value::BigInt(b) => Json::String(b.to_string()),
            Value::String(s) => Json::String(s.clone()),
            Value::Date(d) => Json::String(iso_string(d)),
            Value::Array(items) => Json::Array(
                items.iter().map(|item| item.to_json().unwrap_or(Json::Null)).collect(),
            ),
            Value::Object(record) => Json::Object(
                record
                    .iter()
                    .filter_map(|(k, v)| v.to_json().map(|json| (k.to_string(), json)))
                    .collect(),
            ),
            Value::RegExp(_) | Value::Map(_) | Value::Set(_) | Value::Promise => {
                Json::Object(serde_json::Map::new())
            }
        })
    }
}

// number text is kept verbatim, so `1e+300` stays `1e+300`
fn json_number(n: f64) -> Json {
    if !n.is_finite() {
        return Json::Null;
    }
    format_number(n)
        .parse::<serde_json::Number>()
        .map(Json::Number)
        .unwrap_or(Json::Null)
}

/// Shortest round-trip text of a number: `NaN`, `Infinity`, no `-0`, and
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", n);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", n)
}

/// `2025-09-06T00:00:00.000Z`
pub fn iso_string(d: &DateTime<Utc>) -> String {
    d.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The natural `String(v)` form of a value. Compound values that have no
/// readable form collapse to their `[object …]` label.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::BigInt(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Function(func) => write!(f, "{}", func.source()),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Date(d) => write!(
                f,
                "{}",
                d.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            ),
            Value::RegExp(p) => write!(f, "{}", p),
            Value::Map(_) => write!(f, "[object Map]"),
            Value::Set(_) => write!(f, "[object Set]"),
            Value::Promise => write!(f, "[object Promise]"),
        }
    }
}

// ------------- Conversions --------------
impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Boolean(b) }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self { Value::Number(n as f64) }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Number(n as f64) }
}
impl From<u32> for Value {
    fn from(n: u32) -> Self { Value::Number(n as f64) }
}
impl From<usize> for Value {
    fn from(n: usize) -> Self { Value::Number(n as f64) }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}
impl From<BigInt> for Value {
    fn from(b: BigInt) -> Self { Value::BigInt(b) }
}
impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self { Value::Symbol(s) }
}
impl From<Function> for Value {
    fn from(func: Function) -> Self { Value::Function(func) }
}
impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Value::Array(items) }
}
impl From<Record> for Value {
    fn from(record: Record) -> Self { Value::Object(record) }
}
impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self { Value::Date(d) }
}
impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self { Value::RegExp(p) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
