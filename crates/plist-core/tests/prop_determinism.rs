//! Property-based tests for the encoders.
//!
//! Uses `proptest` to generate random date-free value trees and verify:
//! - encoding is deterministic (same tree, same options → identical bytes)
//! - every date-free tree encodes successfully in all four
//!   `(format, pretty)` combinations
//! - dictionary output depends only on contents, not on insertion order
//!
//! Dates are excluded from generation because both grammars reject them by
//! contract; that path is covered by the hand-written encoder tests.

use std::collections::BTreeMap;

use plist_core::{encode, Format, Value};
use proptest::prelude::*;

/// Dictionary keys: short printable-ASCII strings, including ones that need
/// quoting in the text format.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,11}",
        "[a-zA-Z ]{1,8}",
        Just(String::new()),
    ]
}

/// Leaf values: every case except the containers and Date.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9).prop_map(Value::Real),
        "[ -~]{0,16}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..12).prop_map(Value::Data),
    ]
}

/// Full trees: leaves plus nested arrays and dictionaries, up to 3 levels.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..4).prop_map(Value::Dictionary),
        ]
    })
}

proptest! {
    #[test]
    fn encoding_is_deterministic(value in arb_value()) {
        for format in [Format::Text, Format::Xml] {
            for pretty in [false, true] {
                let first = encode(&value, format, pretty).unwrap();
                let second = encode(&value, format, pretty).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn date_free_trees_always_encode(value in arb_value()) {
        for format in [Format::Text, Format::Xml] {
            for pretty in [false, true] {
                prop_assert!(encode(&value, format, pretty).is_ok());
            }
        }
    }

    #[test]
    fn dictionary_output_ignores_insertion_order(
        entries in prop::collection::btree_map(arb_key(), arb_leaf(), 0..8)
    ) {
        let sorted = Value::Dictionary(entries.clone());

        // rebuild the dictionary inserting entries in reverse key order
        let mut reversed = Value::Dictionary(BTreeMap::new());
        for (key, child) in entries.iter().rev() {
            *reversed.entry(key.clone()).unwrap() = child.clone();
        }

        for format in [Format::Text, Format::Xml] {
            for pretty in [false, true] {
                prop_assert_eq!(
                    encode(&sorted, format, pretty).unwrap(),
                    encode(&reversed, format, pretty).unwrap()
                );
            }
        }
    }

    #[test]
    fn text_keys_appear_in_ascending_order(
        entries in prop::collection::btree_map("[a-z]{1,6}", Just(Value::Integer(0)), 1..6)
    ) {
        let out = encode(&Value::Dictionary(entries.clone()), Format::Text, false).unwrap();
        // with bare lowercase keys and integer values the compact body is
        // exactly the sorted key sequence
        let expected: String = entries
            .keys()
            .map(|k| format!("{k}=0;"))
            .collect();
        prop_assert_eq!(out, format!("// !$*UTF8*$!\n{{{expected}}}"));
    }
}
