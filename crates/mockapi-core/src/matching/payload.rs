//! Request data predicate.

use crate::matching::intersection::json_contains;
use crate::types::request::RequestOptions;
use serde_json::Value;

/// Predicate matching requests whose data contains `expected` as a deep subset.
///
/// Requests without data never match.
pub fn match_data(expected: Value) -> impl Fn(&str, &RequestOptions) -> bool + 'static {
    move |_url: &str, options: &RequestOptions| {
        options
            .data
            .as_ref()
            .is_some_and(|data| json_contains(data, &expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Some(json!({"name": "cpu", "thresholdType": 0})), true)]
    #[case(Some(json!({"name": "cpu"})), true)]
    #[case(Some(json!({"name": "mem"})), false)]
    #[case(Some(json!([{"name": "cpu"}])), false)]
    #[case(None, false)]
    fn test_match_data(#[case] data: Option<Value>, #[case] expected: bool) {
        let predicate = match_data(json!({"name": "cpu"}));
        let options = RequestOptions {
            data,
            ..Default::default()
        };
        assert_eq!(predicate("/alert-rules/", &options), expected);
    }

    #[rstest]
    fn test_match_data_empty_object_matches_any_data() {
        let predicate = match_data(json!({}));
        let options = RequestOptions::new().with_data(json!({"a": 1}));
        assert!(predicate("/x/", &options));
    }
}
