//! Mock API client.
//!
//! `MockClient` has the calling convention of a callback-based HTTP client.
//! Every request is answered from the [`MockRegistry`] instead of the network.

use crate::config::error::ConfigError;
use crate::config::settings::{ClientSettings, DEFAULT_TEST_FRAME_PATTERN};
use crate::error::MockError;
use crate::mocks::promise::{PromiseValue, ResponseFuture, Settlement};
use crate::mocks::queue::EventQueue;
use crate::mocks::recorder::MockRecorder;
use crate::mocks::registry::MockRegistry;
use crate::types::fixture::MockResponse;
use crate::types::request::{Callbacks, ErrorCallback, RequestOptions};
use crate::types::response::{ErrorResponse, ResponseMeta};
use regex::Regex;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Client answering requests from a test-scoped registry.
///
/// Callbacks run inline by default. In mock-async mode they are posted to the
/// client's [`EventQueue`] and run when the test flushes it.
#[derive(Debug)]
pub struct MockClient {
    registry: Rc<RefCell<MockRegistry>>,
    queue: EventQueue,
    mock_async: Cell<bool>,
    test_frame: Regex,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Create a client with its own empty registry and default settings.
    pub fn new() -> Self {
        Self {
            registry: Rc::default(),
            queue: EventQueue::new(),
            mock_async: Cell::new(false),
            test_frame: Regex::new(DEFAULT_TEST_FRAME_PATTERN).expect("valid regex"),
        }
    }

    pub fn with_settings(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Self::with_registry(Rc::default(), settings)
    }

    /// Create a client over an existing registry, e.g. one shared by several clients in a test.
    pub fn with_registry(
        registry: Rc<RefCell<MockRegistry>>,
        settings: &ClientSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            registry,
            queue: EventQueue::new(),
            mock_async: Cell::new(settings.mock_async),
            test_frame: settings.test_frame_regex()?,
        })
    }

    pub fn registry(&self) -> Rc<RefCell<MockRegistry>> {
        Rc::clone(&self.registry)
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn mock_async(&self) -> bool {
        self.mock_async.get()
    }

    pub fn set_mock_async(&self, enabled: bool) {
        self.mock_async.set(enabled);
    }

    pub fn add_mock_response(&self, response: MockResponse) -> MockRecorder {
        self.registry.borrow_mut().add_mock_response(response)
    }

    pub fn add_mock_response_with(
        &self,
        response: MockResponse,
        predicate: impl Fn(&str, &RequestOptions) -> bool + 'static,
    ) -> MockRecorder {
        self.registry
            .borrow_mut()
            .add_mock_response_with(response, predicate)
    }

    pub fn clear_mock_responses(&self) {
        self.registry.borrow_mut().clear_mock_responses();
    }

    /// Register fixtures from files matching a glob pattern.
    pub fn load_mock_responses(&self, pattern: &str) -> Result<Vec<MockRecorder>, MockError> {
        let recorders = self.registry.borrow_mut().load_mock_responses(pattern)?;
        Ok(recorders)
    }

    /// Run queued callbacks and raises until the queue is idle.
    pub fn flush(&self) -> Result<usize, MockError> {
        self.queue.run_until_idle()
    }

    fn respond(&self, f: impl FnOnce() + 'static) {
        if self.mock_async.get() {
            self.queue.post(f);
        } else {
            f();
        }
    }

    /// Simulate a request against the registry.
    ///
    /// - No matching fixture: an [`MockError::UnmockedRequest`] is posted to
    ///   the event queue and surfaces from [`flush`](Self::flush), never
    ///   through `callbacks.error`.
    /// - Status 200 or 202: `callbacks.success` gets the body, an empty
    ///   metadata object, and a [`ResponseMeta`].
    /// - Any other status: `callbacks.error` gets an [`ErrorResponse`].
    ///
    /// `callbacks.complete` runs last in every case.
    pub fn request(&self, url: &str, options: RequestOptions, callbacks: Callbacks) {
        let Callbacks {
            success,
            error,
            complete,
        } = callbacks;
        let method = options.effective_method();

        // The borrow ends here so body generators and callbacks may use the registry.
        let found = self.registry.borrow().find(url, &options);

        match found {
            None => {
                warn!(%method, url, "no mocked response found");
                self.queue
                    .post_raise(MockError::unmocked(method, url, &self.test_frame));
            }
            Some(entry) => {
                entry.recorder().record(url, &options);

                let fixture = entry.fixture();
                let body = fixture.body.resolve(url, &options);
                fixture.record_hit();
                debug!(%method, url, status = fixture.status, "answering with mock response");

                if fixture.is_success() {
                    let meta = ResponseMeta::new(fixture.status, fixture.headers.clone());
                    if let Some(success) = success {
                        self.respond(move || success(body, Value::Object(Map::new()), meta));
                    }
                } else {
                    let response =
                        ErrorResponse::new(fixture.status, body, fixture.headers.clone());
                    self.handle_request_error(url, response, error);
                }
            }
        }

        if let Some(complete) = complete {
            self.respond(complete);
        }
    }

    /// Hand a failure response to the request's error callback.
    pub fn handle_request_error(
        &self,
        path: &str,
        response: ErrorResponse,
        error: Option<ErrorCallback>,
    ) {
        debug!(path, status = response.status, "mock request failed");
        if let Some(error) = error {
            self.respond(move || error(response, "error".to_string(), "error".to_string()));
        }
    }

    /// Promise-style wrapper over [`request`](Self::request).
    ///
    /// Resolves to the body, or to every success argument when
    /// `include_all_args` is set. Rejects with the failure response.
    pub fn request_promise(
        &self,
        path: &str,
        options: RequestOptions,
        include_all_args: bool,
    ) -> ResponseFuture {
        let (tx, rx) = oneshot::channel();
        let on_success = Rc::new(RefCell::new(Some(tx)));
        let on_error = Rc::clone(&on_success);

        let callbacks = Callbacks::new()
            .on_success(move |body, meta, response| {
                let value = if include_all_args {
                    PromiseValue::AllArgs {
                        body,
                        meta,
                        response,
                    }
                } else {
                    PromiseValue::Body(body)
                };
                settle(&on_success, Ok(value));
            })
            .on_error(move |response, _, _| settle(&on_error, Err(response)));

        self.request(path, options, callbacks);
        ResponseFuture::new(rx)
    }
}

fn settle(slot: &RefCell<Option<oneshot::Sender<Settlement>>>, settlement: Settlement) {
    if let Some(tx) = slot.borrow_mut().take() {
        // The caller may have dropped the future; nothing to deliver then.
        let _ = tx.send(settlement);
    }
}
