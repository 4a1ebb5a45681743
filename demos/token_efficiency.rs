//! Size comparison against pretty-printed JSON.
//!
//! Run with: cargo run --example token_efficiency

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{from_str, to_string};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct ApiResponse {
    users: Vec<User>,
    total: u32,
    page: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users: Vec<User> = ["Alice Johnson", "Bob Smith", "Charlie Brown", "Dana Scully"]
        .iter()
        .enumerate()
        .map(|(i, name)| User {
            id: i as u32 + 1,
            name: (*name).to_string(),
            email: format!("{}@example.com", name.split(' ').next().unwrap_or("user").to_lowercase()),
            active: i % 3 != 2,
        })
        .collect();
    let response = ApiResponse {
        total: users.len() as u32,
        users,
        page: 1,
    };

    let json = serde_json::to_string_pretty(&response)?;
    println!("JSON ({} chars):\n{}\n", json.len(), json);

    let compact_json = serde_json::to_string(&response)?;

    let toon = to_string(&response)?;
    println!("TOON ({} chars):\n{}\n", toon.len(), toon);

    let back: ApiResponse = from_str(&toon)?;
    assert_eq!(back, response);

    for (label, baseline) in [("pretty JSON", json.len()), ("compact JSON", compact_json.len())] {
        let savings = (baseline as f64 - toon.len() as f64) / baseline as f64 * 100.0;
        println!("{:>12}: {:.1}% smaller ({} -> {} chars)", label, savings, baseline, toon.len());
    }

    Ok(())
}
