//! Customizing output with `EncodeOptions`.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon_codec::{
    from_str_with_options, to_string, to_string_with_options, DecodeOptions, Delimiter,
    EncodeOptions,
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct DataRow {
    id: u32,
    label: String,
    active: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Report {
    name: String,
    tags: Vec<String>,
    rows: Vec<DataRow>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let report = Report {
        name: "nightly".to_string(),
        tags: vec!["ci".to_string(), "linux, x86".to_string()],
        rows: vec![
            DataRow {
                id: 1,
                label: "build".to_string(),
                active: true,
            },
            DataRow {
                id: 2,
                label: "test, unit".to_string(),
                active: false,
            },
        ],
    };

    println!("Default:\n{}\n", to_string(&report)?);

    // Commas inside values no longer need quoting.
    let tab = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    println!("Tab delimiter:\n{}\n", to_string_with_options(&report, tab)?);

    let pipe = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    println!("Pipe delimiter:\n{}\n", to_string_with_options(&report, pipe)?);

    let compact = EncodeOptions::new()
        .with_length_marker(true)
        .with_inline_primitive_arrays(true);
    println!("Length marker, inline arrays:\n{}\n", to_string_with_options(&report, compact)?);

    let wide = EncodeOptions::new().with_indent(4);
    let text = to_string_with_options(&report, wide.clone())?;
    println!("Four-space indent:\n{}\n", text);

    let back: Report = from_str_with_options(&text, DecodeOptions::from(&wide))?;
    assert_eq!(back, report);

    Ok(())
}
