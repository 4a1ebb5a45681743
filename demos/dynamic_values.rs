//! Working with `Value` when the shape is only known at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{decode, from_value, to_value, Map, Value};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = decode(
        "host: localhost\nport: 8080\nfeatures:\n  - auth\n  - logging\n  - metrics\ndebug: true",
    )?;

    if let Some(host) = config.get("host").and_then(Value::as_str) {
        println!("host     = {}", host);
    }
    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("port     = {}", port);
    }
    if let Some(features) = config.get("features").and_then(Value::as_array) {
        println!("features = {} items\n", features.len());
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let mut user_value = to_value(&user)?;
    println!("User as text:\n{}\n", user_value);

    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}\n", user_value.is_string());

    if let Value::Object(map) = &mut user_value {
        map.insert("name".to_string(), Value::from("Alice Smith"));
    }
    let renamed: User = from_value(user_value)?;
    println!("Renamed: {:?}\n", renamed);

    let mut built = Map::new();
    built.insert("count".to_string(), Value::from(2));
    built.insert("ids".to_string(), Value::from(vec![Value::from(7), Value::from(9)]));
    built.insert("owner".to_string(), Value::Null);
    println!("Built by hand:\n{}", Value::Object(built));

    Ok(())
}
