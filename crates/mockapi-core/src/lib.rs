//! Mocked API client for test harnesses.
//!
//! Tests register canned responses in a [`MockRegistry`]; code under test
//! issues requests through a [`MockClient`], which answers each one from the
//! newest matching fixture and replays it through the request's callbacks.
//!
//! ```
//! use mockapi_core::{Callbacks, MockClient, MockResponse, RequestOptions};
//! use serde_json::json;
//!
//! let client = MockClient::new();
//! let recorder = client.add_mock_response(
//!     MockResponse::new("/projects/").with_body(json!([{"slug": "backend"}])),
//! );
//!
//! client.request(
//!     "/projects/",
//!     RequestOptions::new(),
//!     Callbacks::new().on_success(|body, _, _| assert_eq!(body[0]["slug"], "backend")),
//! );
//! assert_eq!(recorder.call_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod expression;
pub mod matching;
pub mod mocks;
pub mod types;

pub use config::settings::ClientSettings;
pub use error::{MockError, RequestError};
pub use mocks::client::MockClient;
pub use mocks::promise::{PromiseValue, ResponseFuture};
pub use mocks::queue::EventQueue;
pub use mocks::recorder::{MockRecorder, RecordedCall};
pub use mocks::registry::{MockEntry, MockRegistry, Predicate};
pub use types::fixture::{Fixture, MockResponse, ResponseBody};
pub use types::request::{Callbacks, HttpMethod, RequestOptions};
pub use types::response::{ErrorResponse, ResponseMeta};
