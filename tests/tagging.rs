use bigdecimal::num_bigint::BigInt;
use chrono::Utc;
use typewise::data_type;
use typewise::pattern::Pattern;
use typewise::value::{Function, Record, Symbol, Value};

fn samples() -> Vec<(Value, &'static str)> {
    vec![
        (Value::from(123), "number"),
        (Value::from("string"), "string"),
        (Value::from(true), "boolean"),
        (Value::Null, "null"),
        (Value::Undefined, "undefined"),
        (Value::from(BigInt::from(10)), "bigint"),
        (Value::from(Symbol::new("id")), "symbol"),
        (Value::from(Record::new()), "object"),
        (Value::Array(vec![]), "array"),
        (Value::from(Utc::now()), "date"),
        (Value::from(Pattern::new("regex", "").expect("valid pattern")), "regexp"),
        (Value::map(vec![]), "map"),
        (Value::set(vec![]), "set"),
        (Value::Promise, "promise"),
        (Value::from(Function::new("() => {}")), "function"),
        (Value::from(Function::new("function ff() {}").named("ff")), "function"),
        (Value::from(Function::asynchronous("async function f() {}")), "asyncfunction"),
        (Value::from(Function::generator("function* g() {}")), "generatorfunction"),
        (Value::from(Record::named("User").with("name", "Ada")), "user"),
    ]
}

#[test]
fn built_in_kinds() {
    for (value, expected) in samples() {
        assert_eq!(data_type(&value), expected, "tag of {:?}", value);
    }
}

#[test]
fn tags_are_lowercase_and_non_empty() {
    for (value, _) in samples() {
        let tag = data_type(&value);
        assert!(!tag.as_str().is_empty());
        assert_eq!(tag.as_str(), tag.as_str().to_lowercase());
    }
}

#[test]
fn tagging_is_deterministic() {
    for (value, _) in samples() {
        assert_eq!(data_type(&value), data_type(&value.clone()));
    }
}

#[test]
fn custom_record_names_are_lowercased() {
    assert_eq!(data_type(&Record::named("ShoppingCart").into()), "shoppingcart");
    // a custom record still converts like any other record
    let cart = Value::from(Record::named("ShoppingCart").with("items", 3));
    assert_eq!(typewise::to_type(&cart, Some("number")).expect("known target"), Value::from(3));
}
