use typewise::value::{Record, Value};
use typewise::{ErrorKind, TypewiseError, assert_type, data_type, is_type};

fn values() -> Vec<Value> {
    vec![
        Value::from(123),
        Value::from("hello"),
        Value::Null,
        Value::Undefined,
        Value::Array(vec![1.into(), 2.into(), 3.into()]),
        Value::from(Record::named("User")),
        Value::Promise,
    ]
}

#[test]
fn every_value_matches_its_own_tag() {
    for value in values() {
        let tag = data_type(&value);
        assert!(is_type(&value, tag.as_str()));
        assert!(!is_type(&value, &format!("!{}", tag)));
    }
}

#[test]
fn assertion_passes_values_through() {
    for value in values() {
        let tag = data_type(&value);
        assert_eq!(assert_type(value.clone(), tag.as_str()), Ok(value.clone()));
        let err = assert_type(value.clone(), &format!("!{}", tag)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}

#[test]
fn samples() {
    assert_eq!(assert_type("hello".into(), "string"), Ok(Value::from("hello")));
    assert_eq!(assert_type(123.into(), "number"), Ok(Value::from(123)));
    assert_eq!(assert_type("abc".into(), "!number"), Ok(Value::from("abc")));
    let err = assert_type(123.into(), "string").unwrap_err();
    assert_eq!(err.to_string(), "Invalid type: expected string, got number");
    let err = assert_type(Value::Null, "!null").unwrap_err();
    assert_eq!(
        err,
        TypewiseError::Mismatch { expected: "not null".into(), actual: "null".into() }
    );
}

#[test]
fn queries_are_case_insensitive() {
    assert!(is_type(&Value::from(1), "Number"));
    assert!(is_type(&Value::from(Record::named("User")), "USER"));
    let err = assert_type(1.into(), "!NUMBER").unwrap_err();
    assert_eq!(err.to_string(), "Invalid type: expected not NUMBER, got number");
}
