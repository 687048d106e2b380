//! Fixture types: the canned responses tests register.

use crate::types::request::{HttpMethod, RequestOptions};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Produces a response body from the request that matched.
pub type BodyGenerator = Rc<dyn Fn(&str, &RequestOptions) -> Value>;

/// Response body: a literal value or a generator called per request.
#[derive(Clone)]
pub enum ResponseBody {
    Literal(Value),
    Generator(BodyGenerator),
}

impl ResponseBody {
    pub fn generator(f: impl Fn(&str, &RequestOptions) -> Value + 'static) -> Self {
        ResponseBody::Generator(Rc::new(f))
    }

    /// Produce the body for a request.
    pub fn resolve(&self, url: &str, options: &RequestOptions) -> Value {
        match self {
            ResponseBody::Literal(value) => value.clone(),
            ResponseBody::Generator(generate) => generate(url, options),
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::Literal(Value::String(String::new()))
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        ResponseBody::Literal(value)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ResponseBody::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ResponseBody::Literal)
    }
}

/// Partial fixture description accepted by registration.
///
/// Unset fields take the fixture defaults: empty URL, `GET`, status 200,
/// empty string body, no headers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockResponse {
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    #[serde(alias = "statusCode")]
    pub status: Option<u16>,
    pub body: Option<ResponseBody>,
    pub headers: Option<HashMap<String, String>>,
}

impl MockResponse {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(ResponseBody::Literal(body));
        self
    }

    pub fn with_body_fn(mut self, f: impl Fn(&str, &RequestOptions) -> Value + 'static) -> Self {
        self.body = Some(ResponseBody::generator(f));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Registered fixture with all defaults applied.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Exact URL this fixture answers
    pub url: String,
    pub method: HttpMethod,
    /// HTTP status code; 200 and 202 go to the success callback
    pub status: u16,
    pub body: ResponseBody,
    pub headers: HashMap<String, String>,
    call_count: Cell<u32>,
}

impl Fixture {
    /// Number of dispatches this fixture has answered.
    pub fn call_count(&self) -> u32 {
        self.call_count.get()
    }

    pub(crate) fn record_hit(&self) {
        self.call_count.set(self.call_count.get().saturating_add(1));
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 202)
    }
}

impl From<MockResponse> for Fixture {
    fn from(response: MockResponse) -> Self {
        Self {
            url: response.url.unwrap_or_default(),
            method: response.method.unwrap_or_default(),
            status: response.status.unwrap_or(200),
            body: response.body.unwrap_or_default(),
            headers: response.headers.unwrap_or_default(),
            call_count: Cell::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_fixture_defaults() {
        let fixture = Fixture::from(MockResponse::default());
        assert_eq!(fixture.url, "");
        assert_eq!(fixture.method, HttpMethod::Get);
        assert_eq!(fixture.status, 200);
        assert!(fixture.headers.is_empty());
        assert_eq!(fixture.call_count(), 0);
        assert_eq!(
            fixture.body.resolve("", &RequestOptions::default()),
            json!("")
        );
    }

    #[rstest]
    #[case(200, true)]
    #[case(202, true)]
    #[case(201, false)]
    #[case(204, false)]
    #[case(400, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn test_fixture_success_statuses(#[case] status: u16, #[case] expected: bool) {
        let fixture = Fixture::from(MockResponse::new("/").with_status(status));
        assert_eq!(fixture.is_success(), expected);
    }

    #[rstest]
    fn test_body_generator_sees_request() {
        let body = ResponseBody::generator(|url, options| {
            json!({"url": url, "method": options.effective_method().as_str()})
        });
        let options = RequestOptions::new().with_method(HttpMethod::Put);
        assert_eq!(
            body.resolve("/projects/", &options),
            json!({"url": "/projects/", "method": "PUT"})
        );
    }

    #[rstest]
    fn test_record_hit_increments() {
        let fixture = Fixture::from(MockResponse::new("/projects/"));
        fixture.record_hit();
        fixture.record_hit();
        assert_eq!(fixture.call_count(), 2);
    }

    #[rstest]
    fn test_mock_response_deserialize_yaml() {
        let content = "url: /projects/\nmethod: POST\nstatusCode: 400\nbody:\n  detail: bad\nheaders:\n  X-Test: abc\n";
        let response: MockResponse = serde_yaml::from_str(content).expect("Should deserialize");
        let fixture = Fixture::from(response);
        assert_eq!(fixture.url, "/projects/");
        assert_eq!(fixture.method, HttpMethod::Post);
        assert_eq!(fixture.status, 400);
        assert_eq!(fixture.headers["X-Test"], "abc");
        assert_eq!(
            fixture.body.resolve("/projects/", &RequestOptions::default()),
            json!({"detail": "bad"})
        );
    }

    #[rstest]
    fn test_mock_response_deserialize_minimal_json() {
        let response: MockResponse =
            serde_json::from_str(r#"{"url": "/teams/"}"#).expect("Should deserialize");
        assert_eq!(response.url.as_deref(), Some("/teams/"));
        assert!(response.status.is_none());
        assert!(response.body.is_none());
    }

    #[rstest]
    fn test_response_body_debug_hides_generator() {
        let body = ResponseBody::generator(|_, _| json!(1));
        assert_eq!(format!("{body:?}"), "Generator(..)");
    }
}
