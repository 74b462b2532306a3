//! The aggregate entry point and its dynamic, argument-list call surface.
//!
//! [`Typewise`] bundles the four operations (`dataType`, `isType`,
//! `assertType`, `toType`) behind one value carrying [`Settings`]. Rust
//! callers use the typed methods; embedders that forward calls from a
//! dynamic runtime use [`Typewise::invoke`], which checks argument counts and
//! query shapes the way a dynamic caller expects.

use bigdecimal::num_traits::Zero;
use tracing::trace;

use crate::datatype::{self, TypeTag};
use crate::error::{Result, TypewiseError};
use crate::registry;
use crate::settings::Settings;
use crate::value::Value;

/// Names accepted by [`Typewise::invoke`].
pub const OPERATIONS: [&str; 4] = ["dataType", "isType", "assertType", "toType"];

#[derive(Debug, Clone, Default)]
pub struct Typewise {
    settings: Settings,
}

impl Typewise {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn data_type(&self, value: &Value) -> TypeTag {
        datatype::data_type(value)
    }
    pub fn is_type(&self, value: &Value, query: &str) -> bool {
        datatype::is_type(value, query)
    }
    pub fn assert_type(&self, value: Value, query: &str) -> Result<Value> {
        datatype::assert_type(value, query)
    }
    /// Like [`crate::to_type`], with pattern flags taken from the settings.
    pub fn to_type(&self, value: &Value, target: Option<&str>) -> Result<Value> {
        registry::to_type_with(value, target, &self.settings.pattern)
    }

    /// Calls `operation` with positional `args`.
    pub fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value> {
        trace!(operation, arguments = args.len(), "invoke");
        match operation {
            "dataType" => {
                if args.len() > 1 {
                    return Err(TypewiseError::Usage(String::from("dataType only accepts 1 argument")));
                }
                Ok(Value::String(self.data_type(argument(args, 0)).into_string()))
            }
            "isType" => {
                let query = text_query(args.get(1), "Expected type must be a string")?;
                Ok(Value::Boolean(self.is_type(argument(args, 0), query)))
            }
            "assertType" => {
                if args.len() != 2 {
                    return Err(TypewiseError::Usage(String::from(
                        "assertType requires exactly 2 arguments",
                    )));
                }
                let query = text_query(args.get(1), "type must be a string")?;
                self.assert_type(args[0].clone(), query)
            }
            "toType" => {
                let target = match args.get(1) {
                    // a falsy target selects every converter
                    None => None,
                    Some(target) if is_falsy(target) => None,
                    Some(Value::String(name)) => Some(name.as_str()),
                    Some(other) => return Err(TypewiseError::UnknownType(other.to_string())),
                };
                self.to_type(argument(args, 0), target)
            }
            _ => Err(TypewiseError::UnknownOperation(operation.to_string())),
        }
    }
}

static UNDEFINED: Value = Value::Undefined;

// missing positional arguments read as undefined
fn argument(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&UNDEFINED)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Undefined => true,
        Value::Boolean(b) => !b,
        Value::Number(n) => *n == 0.0 || n.is_nan(),
        Value::BigInt(b) => b.is_zero(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn text_query<'a>(query: Option<&'a Value>, message: &str) -> Result<&'a str> {
    match query {
        Some(Value::String(text)) => Ok(text),
        _ => Err(TypewiseError::QueryShape(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::pattern::PatternOptions;

    #[test]
    fn data_type_arity() {
        let tw = Typewise::default();
        assert_eq!(tw.invoke("dataType", &[123.into()]), Ok(Value::from("number")));
        assert_eq!(tw.invoke("dataType", &[]), Ok(Value::from("undefined")));
        let err = tw.invoke("dataType", &[1.into(), 2.into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn query_must_be_text() {
        let tw = Typewise::default();
        let err = tw.invoke("isType", &[1.into(), 2.into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = tw.invoke("assertType", &[1.into(), Value::Null]).unwrap_err();
        assert_eq!(err, TypewiseError::QueryShape(String::from("type must be a string")));
    }

    #[test]
    fn assert_type_arity() {
        let tw = Typewise::default();
        let err = tw.invoke("assertType", &[1.into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        let err = tw.invoke("assertType", &[1.into(), "number".into(), 3.into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(tw.invoke("assertType", &[1.into(), "number".into()]), Ok(Value::from(1)));
    }

    #[test]
    fn to_type_targets() {
        let tw = Typewise::default();
        assert_eq!(tw.invoke("toType", &["123abc".into(), "number".into()]), Ok(Value::from(123)));
        assert!(matches!(tw.invoke("toType", &[1.into()]), Ok(Value::Object(_))));
        assert!(matches!(tw.invoke("toType", &[1.into(), false.into()]), Ok(Value::Object(_))));
        let err = tw.invoke("toType", &[1.into(), 5.into()]).unwrap_err();
        assert_eq!(err, TypewiseError::UnknownType(String::from("5")));
        let err = tw.invoke("toType", &[1.into(), "float".into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn unknown_operation() {
        let err = Typewise::default().invoke("toNumber", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn settings_shape_patterns() {
        let settings = Settings {
            pattern: PatternOptions { global: false, ignore_case: true, multiline: true },
        };
        let tw = Typewise::new(settings);
        match tw.to_type(&"abc".into(), Some("regexp")).unwrap() {
            Value::RegExp(p) => assert_eq!(p.flags(), "im"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
