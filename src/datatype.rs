//! Type tagging, matching and assertion.
//!
//! Every value gets exactly one lowercase [`TypeTag`]. Records declared with
//! a type name report that name (`User` tags as `"user"`), and functions
//! are refined into `asyncfunction`, `generatorfunction` and
//! `asyncgeneratorfunction`.

// used to print out readable forms of a tag
use std::fmt;

use crate::error::{Result, TypewiseError};
use crate::value::{FunctionKind, Value};

/// The name plain records are constructed by; it never replaces `object`.
const BASE_TYPE_NAME: &str = "Object";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(String);

impl TypeTag {
    fn new(label: &str) -> Self {
        TypeTag(label.to_lowercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn into_string(self) -> String {
        self.0
    }
}
impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A parsed type query: an expected tag, optionally negated with `!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuery {
    negated: bool,
    expected: String,
}

impl TypeQuery {
    pub fn parse(query: &str) -> Self {
        match query.strip_prefix('!') {
            Some(rest) => TypeQuery { negated: true, expected: rest.to_string() },
            None => TypeQuery { negated: false, expected: query.to_string() },
        }
    }
    pub fn is_negated(&self) -> bool {
        self.negated
    }
    /// The expected tag as written, without the negation mark.
    pub fn expected(&self) -> &str {
        &self.expected
    }
    pub fn matches(&self, tag: &TypeTag) -> bool {
        (tag.as_str() == self.expected.to_lowercase()) != self.negated
    }
    /// `string` or `not string`, as used in mismatch messages.
    pub fn describe(&self) -> String {
        if self.negated {
            format!("not {}", self.expected)
        } else {
            self.expected.clone()
        }
    }
}

/// The precise type tag of `value`. Total and deterministic.
pub fn data_type(value: &Value) -> TypeTag {
    match value {
        Value::Object(record) => match record.type_name() {
            Some(name) if !name.is_empty() && name != BASE_TYPE_NAME => TypeTag::new(name),
            _ => TypeTag::new(value.structural_tag()),
        },
        Value::Function(func) => TypeTag::new(match func.kind() {
            FunctionKind::Plain => "function",
            FunctionKind::Async => "asyncfunction",
            FunctionKind::Generator => "generatorfunction",
            FunctionKind::AsyncGenerator => "asyncgeneratorfunction",
        }),
        _ => TypeTag::new(value.structural_tag()),
    }
}

/// Whether the tag of `value` satisfies `query` (case-insensitive, `!`
/// negates).
pub fn is_type(value: &Value, query: &str) -> bool {
    TypeQuery::parse(query).matches(&data_type(value))
}

/// Returns `value` unchanged when it satisfies `query`, so the check can be
/// used inline.
pub fn assert_type(value: Value, query: &str) -> Result<Value> {
    let query = TypeQuery::parse(query);
    let actual = data_type(&value);
    if query.matches(&actual) {
        Ok(value)
    } else {
        Err(TypewiseError::Mismatch { expected: query.describe(), actual: actual.into_string() })
    }
}
