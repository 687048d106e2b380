//! Ready-made predicates for narrowing fixtures beyond URL and method.
//!
//! Each helper returns a closure suitable for
//! [`MockRegistry::add_mock_response_with`](crate::mocks::registry::MockRegistry::add_mock_response_with).

mod expression;
mod headers;
mod intersection;
mod payload;
mod query;

pub use expression::match_expression;
pub use headers::{headers_contain, match_headers};
pub use intersection::{json_contains, pairs_contain};
pub use payload::match_data;
pub use query::{match_query, parse_query_string, request_query};
