//! Registry of mock responses.
//!
//! Fixtures are kept newest-first: registration prepends, and lookup returns
//! the first match, so the most recently registered fixture wins.

use crate::config::error::ConfigError;
use crate::config::parser::load_mock_responses;
use crate::mocks::recorder::MockRecorder;
use crate::types::fixture::{Fixture, MockResponse};
use crate::types::request::RequestOptions;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Additional filter evaluated after URL and method match.
pub type Predicate = Rc<dyn Fn(&str, &RequestOptions) -> bool>;

/// Registered fixture paired with its recorder and predicate.
pub struct MockEntry {
    fixture: Fixture,
    recorder: MockRecorder,
    predicate: Predicate,
}

impl MockEntry {
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    pub fn recorder(&self) -> &MockRecorder {
        &self.recorder
    }

    /// Exact URL, method (`GET` by default), then predicate.
    pub fn matches(&self, url: &str, options: &RequestOptions) -> bool {
        self.fixture.url == url
            && self.fixture.method == options.effective_method()
            && (self.predicate)(url, options)
    }
}

impl fmt::Debug for MockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockEntry")
            .field("fixture", &self.fixture)
            .field("recorder", &self.recorder)
            .finish_non_exhaustive()
    }
}

/// Test-scoped store of mock responses.
#[derive(Debug, Default)]
pub struct MockRegistry {
    entries: VecDeque<Rc<MockEntry>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixture that matches on URL and method alone.
    pub fn add_mock_response(&mut self, response: MockResponse) -> MockRecorder {
        self.add_mock_response_with(response, |_: &str, _: &RequestOptions| true)
    }

    /// Register a fixture with an extra predicate over `(url, options)`.
    ///
    /// Predicates run while the registry is borrowed and must not register
    /// or clear fixtures.
    pub fn add_mock_response_with(
        &mut self,
        response: MockResponse,
        predicate: impl Fn(&str, &RequestOptions) -> bool + 'static,
    ) -> MockRecorder {
        let fixture = Fixture::from(response);
        let recorder = MockRecorder::new();
        debug!(
            url = %fixture.url,
            method = %fixture.method,
            status = fixture.status,
            "registered mock response"
        );
        self.entries.push_front(Rc::new(MockEntry {
            fixture,
            recorder: recorder.clone(),
            predicate: Rc::new(predicate),
        }));
        recorder
    }

    /// Register every fixture found in files matching a glob pattern.
    ///
    /// Fixtures are registered in file order, so later ones take precedence.
    pub fn load_mock_responses(&mut self, pattern: &str) -> Result<Vec<MockRecorder>, ConfigError> {
        let responses = load_mock_responses(pattern)?;
        Ok(responses
            .into_iter()
            .map(|response| self.add_mock_response(response))
            .collect())
    }

    pub fn clear_mock_responses(&mut self) {
        debug!(count = self.entries.len(), "cleared mock responses");
        self.entries.clear();
    }

    /// Find the newest fixture matching the request.
    pub fn find(&self, url: &str, options: &RequestOptions) -> Option<Rc<MockEntry>> {
        self.entries
            .iter()
            .find(|entry| entry.matches(url, options))
            .cloned()
    }

    /// Registered entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &MockEntry> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
