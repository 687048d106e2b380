//! Subset checks shared by the predicates.

use serde_json::Value;
use std::collections::HashMap;

/// Whether `expected` is a deep subset of `actual`.
///
/// Objects match when every expected key matches; arrays match when every
/// expected element matches some actual element; other values compare equal.
pub fn json_contains(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => expected
            .iter()
            .all(|(key, ev)| actual.get(key).is_some_and(|av| json_contains(av, ev))),
        (Value::Array(actual), Value::Array(expected)) => expected
            .iter()
            .all(|ev| actual.iter().any(|av| json_contains(av, ev))),
        _ => actual == expected,
    }
}

/// Whether every expected key/value pair is present in `actual`.
///
/// Values may hold comma-separated lists; a pair matches when the two lists
/// share at least one trimmed item.
pub fn pairs_contain(actual: &HashMap<String, String>, expected: &HashMap<String, String>) -> bool {
    expected.iter().all(|(key, expected_value)| {
        actual.get(key).is_some_and(|actual_value| {
            expected_value
                .split(',')
                .any(|ev| actual_value.split(',').any(|av| av.trim() == ev.trim()))
        })
    })
}
