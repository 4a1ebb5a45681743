//! Basic serialization and deserialization.
//!
//! Run with: RUST_LOG=toon_codec=debug cargo run --example simple

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{decode, from_str, to_string, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let toon = to_string(&users)?;
    println!("Output:\n{}\n", toon);

    let users_back: Vec<User> = from_str(&toon)?;
    assert_eq!(users, users_back);
    println!("Round-trip successful");

    // An explicit comma mark in the header reads the same as the default.
    let rows = decode("[2,]{id,name}:\n  1,Alice\n  2,Bob")?;
    println!("\n[2,] header decodes to:\n{}", rows);

    let person = decode("name: Alice\nage: 30")?;
    assert_eq!(person.get("age").and_then(Value::as_i64), Some(30));

    Ok(())
}
