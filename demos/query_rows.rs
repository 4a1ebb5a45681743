//! Query-result rows packed into a chat prompt, as TOON and as pretty JSON.
//!
//! Run with: RUST_LOG=toon_codec=debug cargo run --example query_rows

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{from_str, to_string};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bruno", "Chloe", "Dmitri", "Elena", "Farid", "Grace", "Hiro",
];
const LAST_NAMES: [&str; 5] = ["Nguyen", "Smith", "Okafor", "Rossi", "Tanaka"];
const FOODS: [&str; 10] = [
    "Pizza", "Sushi", "Tacos", "Pasta", "Burger", "Steak", "Salad", "Curry", "Pho", "Ramen",
];
const CITIES: [&str; 6] = [
    "Lake Marcus",
    "Port Jenna",
    "New Haven",
    "Springfield",
    "East Linda",
    "Riverside",
];

/// One row of `SELECT name, age, fav_food, city FROM users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct UserRow {
    name: String,
    age: u32,
    fav_food: String,
    city: String,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Deterministic stand-in for a seeded `users` table.
fn seed_users(count: usize) -> Vec<UserRow> {
    (0..count)
        .map(|i| UserRow {
            name: format!(
                "{} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i * 3) % LAST_NAMES.len()]
            ),
            age: 18 + ((i * 7) % 48) as u32,
            fav_food: FOODS[(i * 5) % FOODS.len()].to_string(),
            city: CITIES[(i * 11) % CITIES.len()].to_string(),
        })
        .collect()
}

fn chat_messages(format: &str, question: &str, data: &str) -> Vec<Message> {
    let system = format!(
        "You are an intelligent, helpful data assistant. Your task is to answer the user's \
         question based ONLY on the context provided in the {format} data below. \
         Do not use any external knowledge. If the {format} context is empty or does not \
         contain the answer, say you could not find the information."
    );
    let user = format!("USER QUESTION: {question}\n\nCONTEXTUAL {format} DATA:\n---\n{data}\n---");

    vec![
        Message {
            role: "system",
            content: system,
        },
        Message {
            role: "user",
            content: user,
        },
    ]
}

fn payload_size(messages: &[Message]) -> usize {
    messages.iter().map(|m| m.content.len()).sum()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let users = seed_users(50);
    let rows: Vec<UserRow> = users.into_iter().filter(|u| u.age > 18).collect();
    info!(rows = rows.len(), "query returned rows");

    let question = "Please list the names, ages, and cities of all users who are older than 18";

    let toon_data = to_string(&rows)?;
    let json_data = serde_json::to_string_pretty(&rows)?;

    let with_toon = chat_messages("TOON", question, &toon_data);
    let without_toon = chat_messages("JSON", question, &json_data);

    if let Some(user) = with_toon.last() {
        println!("{}\n", user.content.lines().take(10).collect::<Vec<_>>().join("\n"));
    }

    let toon_size = payload_size(&with_toon);
    let json_size = payload_size(&without_toon);
    println!("Rows:             {}", rows.len());
    println!("TOON data:        {} bytes", toon_data.len());
    println!("JSON data:        {} bytes", json_data.len());
    println!("TOON payload:     {} bytes", toon_size);
    println!("JSON payload:     {} bytes", json_size);
    println!(
        "Payload savings:  {:.1}%",
        (1.0 - toon_size as f64 / json_size as f64) * 100.0
    );

    // What the model receives can be read back into the same rows.
    let back: Vec<UserRow> = from_str(&toon_data)?;
    assert_eq!(back, rows);

    println!("\nRequest body:\n{}", serde_json::to_string_pretty(&with_toon)?);

    Ok(())
}
