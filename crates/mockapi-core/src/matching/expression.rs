//! JMESPath request predicate.

use crate::expression::{self, ExpressionError};
use crate::matching::query::request_query;
use crate::types::request::RequestOptions;
use serde_json::{json, Value};

fn request_document(url: &str, options: &RequestOptions) -> Value {
    json!({
        "url": url,
        "method": options.effective_method().as_str(),
        "query": request_query(url, options),
        "data": options.data.clone().unwrap_or(Value::Null),
        "headers": options.headers.clone().unwrap_or_default(),
    })
}

/// Predicate evaluating a JMESPath expression against the request.
///
/// The expression sees `{url, method, query, data, headers}`; a truthy
/// result matches.
pub fn match_expression(
    source: &str,
) -> Result<impl Fn(&str, &RequestOptions) -> bool + 'static, ExpressionError> {
    let compiled = expression::compile(source)?;
    Ok(move |url: &str, options: &RequestOptions| {
        expression::matches(&compiled, &request_document(url, options))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::HttpMethod;
    use rstest::rstest;

    #[rstest]
    #[case("method == 'POST' && data.sensitivity == 'high'", true)]
    #[case("query.project == '42'", true)]
    #[case("contains(url, 'alert-rules')", true)]
    #[case("data.sensitivity == 'low'", false)]
    #[case("headers.Accept", false)]
    fn test_match_expression(#[case] source: &str, #[case] expected: bool) {
        let predicate = match_expression(source).expect("Should compile");
        let options = RequestOptions::new()
            .with_method(HttpMethod::Post)
            .with_data(json!({"sensitivity": "high"}));
        assert_eq!(
            predicate("/organizations/acme/alert-rules/?project=42", &options),
            expected
        );
    }

    #[rstest]
    fn test_match_expression_invalid() {
        assert!(match_expression("[oops").is_err());
    }
}
