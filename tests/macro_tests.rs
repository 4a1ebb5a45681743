use serde::ser::{Error as _, Serialize, Serializer};
use toon_codec::{decode, encode, toon, Map, Number, Value};

#[test]
fn test_toon_macro_null() {
    let value = toon!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_toon_macro_booleans() {
    assert_eq!(toon!(true), Value::Bool(true));
    assert_eq!(toon!(false), Value::Bool(false));
}

#[test]
fn test_toon_macro_numbers() {
    assert_eq!(toon!(42), Value::Number(Number::Integer(42)));
    assert_eq!(toon!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(toon!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(toon!([(-1), 2]), Value::Array(vec![Value::from(-1), Value::from(2)]));
}

#[test]
fn test_toon_macro_strings() {
    assert_eq!(toon!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(toon!(""), Value::String(String::new()));
}

#[test]
fn test_toon_macro_arrays() {
    assert_eq!(toon!([]), Value::Array(vec![]));

    let mixed_array = toon!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_toon_macro_objects() {
    assert_eq!(toon!({}), Value::Object(Map::new()));

    let simple_object = toon!({
        "name": "Alice",
        "age": 30
    });

    let obj = simple_object.as_object().expect("object");
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Value::from("Alice")));
    assert_eq!(obj.get("age"), Some(&Value::from(30)));
}

#[test]
fn test_toon_macro_nested() {
    let nested = toon!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let user = nested.get("user").and_then(Value::as_object).expect("user");
    assert_eq!(user.get("id"), Some(&Value::from(123)));
    assert_eq!(user.get("name"), Some(&Value::from("Bob")));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = nested.get("tags").and_then(Value::as_array).expect("tags");
    assert_eq!(tags, &vec![Value::from("admin"), Value::from("developer")]);
    assert_eq!(nested.get("count"), Some(&Value::from(42)));
}

#[test]
fn test_toon_macro_expressions() {
    let name = "Carol";
    let scores = vec![7u8, 9];
    let value = toon!({
        "name": name,
        "scores": scores,
        "missing": (None::<u8>)
    });

    assert_eq!(
        value,
        toon!({"name": "Carol", "scores": [7, 9], "missing": null})
    );
}

#[test]
fn test_toon_macro_encodes_tabular() {
    let value = toon!({
        "items": [
            {"sku": "A1", "qty": 2, "price": 9.99},
            {"sku": "B2", "qty": 1, "price": 14.5}
        ]
    });

    let text = encode(&value);
    assert_eq!(text, "items: [2]{sku,qty,price}:\n  A1,2,9.99\n  B2,1,14.5");
    assert_eq!(decode(&text).unwrap(), value);
}

#[test]
fn test_toon_macro_key_order_matters() {
    let a = toon!({"x": 1, "y": 2});
    let b = toon!({"y": 2, "x": 1});
    assert_ne!(a, b);
    assert_ne!(encode(&a), encode(&b));
}

#[test]
fn test_toon_macro_display() {
    let value = toon!({"id": 1, "tags": []});
    assert_eq!(value.to_string(), "id: 1\ntags: [0]:");
}

struct Unrepresentable;

impl Serialize for Unrepresentable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("no text form"))
    }
}

#[test]
fn test_toon_macro_unconvertible_expression_is_null() {
    assert!(toon_codec::to_value(&Unrepresentable).is_err());
    assert_eq!(toon!(Unrepresentable), Value::Null);
    assert_eq!(
        toon!({"ok": 1, "bad": Unrepresentable}),
        toon!({"ok": 1, "bad": null})
    );
}
