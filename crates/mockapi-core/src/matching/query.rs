//! Query parameter predicate.

use crate::matching::intersection::pairs_contain;
use crate::types::request::RequestOptions;
use std::collections::HashMap;

/// Parse query string into HashMap with URL decoding.
///
/// Repeated keys are joined with commas.
pub fn parse_query_string(query_str: &str) -> HashMap<String, String> {
    let mut result: HashMap<String, String> = HashMap::new();

    for pair in query_str.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(raw_key);
        let value = decode(raw_value);

        result
            .entry(key)
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    result
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    let decoded = urlencoding::decode(&raw).map(|s| s.into_owned());
    decoded.unwrap_or(raw)
}

/// Query of a request: `options.query`, or the URL's query string when unset.
pub fn request_query(url: &str, options: &RequestOptions) -> HashMap<String, String> {
    match &options.query {
        Some(query) => query.clone(),
        None => url
            .split_once('?')
            .map(|(_, q)| parse_query_string(q))
            .unwrap_or_default(),
    }
}

/// Predicate matching requests whose query contains every expected pair.
pub fn match_query<K, V, I>(expected: I) -> impl Fn(&str, &RequestOptions) -> bool + 'static
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let expected: HashMap<String, String> = expected
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    move |url: &str, options: &RequestOptions| pairs_contain(&request_query(url, options), &expected)
}
