//! Request headers predicate (case-insensitive names).

use crate::types::request::RequestOptions;
use std::collections::HashMap;

/// Whether every expected header is present in `actual`, comparing names
/// case-insensitively and values exactly.
pub fn headers_contain(
    actual: &HashMap<String, String>,
    expected: &HashMap<String, String>,
) -> bool {
    expected.iter().all(|(name, value)| {
        actual
            .iter()
            .any(|(k, v)| k.eq_ignore_ascii_case(name) && v == value)
    })
}

/// Predicate matching requests that carry every expected header.
pub fn match_headers<K, V, I>(expected: I) -> impl Fn(&str, &RequestOptions) -> bool + 'static
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let expected: HashMap<String, String> = expected
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    move |_url: &str, options: &RequestOptions| match &options.headers {
        Some(actual) => headers_contain(actual, &expected),
        None => expected.is_empty(),
    }
}
