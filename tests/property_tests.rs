//! Property-based tests for the round-trip and tabular guarantees.
//!
//! Values are generated over every variant, including strings full of
//! delimiters, quotes and control characters, and arbitrary nesting.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use toon_codec::{
    decode, encode, from_str, tabular, to_string, DecodeOptions, Decoder, Delimiter,
    EncodeOptions, Encoder, ErrorKind, Map, Value,
};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9 _.]{0,10}",
        "[ -~]{0,12}",
        "[-0-9.eE+]{1,6}",
        Just("null".to_string()),
        Just("- item".to_string()),
        any::<String>(),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z_][a-z0-9_.]{0,8}", arb_string()]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(Value::from),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

/// Arrays of flat records sharing one key order.
fn arb_table() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_key(), 1..5).prop_flat_map(|keys| {
        let mut unique = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        let width = unique.len();
        prop::collection::vec(prop::collection::vec(arb_scalar(), width), 1..8).prop_map(
            move |rows| {
                rows.into_iter()
                    .map(|row| {
                        Value::Object(unique.iter().cloned().zip(row).collect::<Map>())
                    })
                    .collect()
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_value_roundtrip(value in arb_value()) {
        let text = encode(&value);
        let back = decode(&text);
        prop_assert_eq!(back.as_ref(), Ok(&value), "text was:\n{}", text);
    }

    #[test]
    fn prop_roundtrip_with_options(
        value in arb_value(),
        indent in 1usize..5,
        delimiter in prop_oneof![Just(Delimiter::Comma), Just(Delimiter::Tab), Just(Delimiter::Pipe)],
        marker in any::<bool>(),
        inline in any::<bool>(),
    ) {
        let options = EncodeOptions::new()
            .with_indent(indent)
            .with_delimiter(delimiter)
            .with_length_marker(marker)
            .with_inline_primitive_arrays(inline);

        let text = Encoder::new(options.clone()).encode(&value);
        let back = Decoder::new(DecodeOptions::from(&options)).decode(&text);
        prop_assert_eq!(back.as_ref(), Ok(&value), "text was:\n{}", text);
    }

    #[test]
    fn prop_uniform_records_are_tabular(rows in arb_table()) {
        let text = encode(&Value::Array(rows.clone()));
        let header = format!("[{}]{{", rows.len());
        prop_assert!(text.starts_with(&header), "text was:\n{}", text);
        prop_assert_eq!(text.lines().count(), rows.len() + 1);
        prop_assert_eq!(decode(&text), Ok(Value::Array(rows)));
    }

    #[test]
    fn prop_mixed_arrays_are_not_tabular(rows in arb_table(), extra in arb_scalar()) {
        let mut items = rows;
        items.push(extra);
        prop_assert_eq!(tabular::detect(&items), tabular::Detection::NotTabular);

        let text = encode(&Value::Array(items.clone()));
        prop_assert!(text.starts_with("- "), "text was:\n{}", text);
        prop_assert_eq!(decode(&text), Ok(Value::Array(items)));
    }

    #[test]
    fn prop_wrong_row_count_is_rejected(rows in arb_table(), delta in 1usize..3) {
        let text = encode(&Value::Array(rows.clone()));
        let declared = rows.len() + delta;
        let tampered = text.replacen(
            &format!("[{}]", rows.len()),
            &format!("[{}]", declared),
            1,
        );
        let err = decode(&tampered).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::RowCountMismatch);
        prop_assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in arb_string()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
