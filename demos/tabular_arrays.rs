//! Tabular layout for arrays of uniform records.
//!
//! Run with: cargo run --example tabular_arrays

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{from_str, tabular, to_string, to_value, Detection};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    in_stock: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Listing {
    sku: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    discount: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let products = vec![
        Product {
            sku: "WIDGET-001".into(),
            name: "Super Widget".into(),
            price: 29.99,
            in_stock: true,
        },
        Product {
            sku: "GADGET-002".into(),
            name: "Mega Gadget, XL".into(),
            price: 49.99,
            in_stock: false,
        },
        Product {
            sku: "TOOL-003".into(),
            name: "Ultra Tool".into(),
            price: 19.99,
            in_stock: true,
        },
    ];

    let toon = to_string(&products)?;
    println!("Uniform records:\n{}\n", toon);

    let products_back: Vec<Product> = from_str(&toon)?;
    assert_eq!(products, products_back);

    // A record missing a key breaks uniformity and falls back to a list.
    let listings = vec![
        Listing {
            sku: "WIDGET-001".into(),
            discount: Some(0.1),
        },
        Listing {
            sku: "TOOL-003".into(),
            discount: None,
        },
    ];
    let value = to_value(&listings)?;
    if let Some(items) = value.as_array() {
        match tabular::detect(items) {
            Detection::Tabular(fields) => println!("tabular with fields {:?}", fields),
            Detection::NotTabular => println!("not tabular, written as a list:"),
        }
    }
    println!("{}\n", value);

    let listings_back: Vec<Listing> = from_str(&value.to_string())?;
    assert_eq!(listings, listings_back);
    println!("Round-trips successful");

    Ok(())
}
