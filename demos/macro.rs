//! Building values with the `toon!` macro.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use toon_codec::{decode, encode, toon, Value};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Scalars:");
    for value in [toon!(null), toon!(true), toon!(42), toon!(2.0), toon!("Hello, world")] {
        println!("  {:<8} {}", value.type_name(), encode(&value));
    }
    println!();

    let status = toon!({
        "items": [
            {"id": 1, "status": "active"},
            {"id": 2, "status": "pending"},
            {"id": 3, "status": "completed"}
        ]
    });
    println!("Uniform records collapse into a table:\n{}\n", status);

    let config = toon!({
        "app": {"name": "MyApp", "version": "1.0.0"},
        "database": {"host": "localhost", "port": 5432},
        "features": ["auth", "logging", "metrics"],
        "limits": {},
        "debug": true
    });
    println!("Nested structures:\n{}\n", config);

    let generated: Vec<Value> = (1..=3).map(|n| toon!({"n": n, "square": (n * n)})).collect();
    let summary = toon!({"total": 3, "rows": generated});
    println!("Values from expressions:\n{}\n", summary);

    let back = decode(&encode(&config))?;
    assert_eq!(back, config);

    if let Some(name) = config.get("app").and_then(|app| app.get("name")).and_then(Value::as_str) {
        println!("app.name = {}", name);
    }
    if let Some(features) = config.get("features").and_then(Value::as_array) {
        println!("{} features enabled", features.len());
    }

    Ok(())
}
