//! Invocation history for a registered fixture.

use crate::types::request::RequestOptions;
use std::cell::RefCell;
use std::rc::Rc;

/// One dispatch answered by a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub options: RequestOptions,
}

/// Handle returned by registration; records every request the fixture answers.
///
/// Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MockRecorder {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl MockRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, url: &str, options: &RequestOptions) {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            options: options.clone(),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn was_called_with(&self, url: &str, options: &RequestOptions) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| call.url == url && &call.options == options)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.borrow().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::HttpMethod;
    use rstest::rstest;

    #[rstest]
    fn test_recorder_starts_empty() {
        let recorder = MockRecorder::new();
        assert_eq!(recorder.call_count(), 0);
        assert!(!recorder.was_called());
        assert!(recorder.last_call().is_none());
    }

    #[rstest]
    fn test_recorder_records_calls_in_order() {
        let recorder = MockRecorder::new();
        let post = RequestOptions::new().with_method(HttpMethod::Post);
        recorder.record("/a/", &RequestOptions::new());
        recorder.record("/b/", &post);

        assert_eq!(recorder.call_count(), 2);
        assert!(recorder.was_called_with("/b/", &post));
        assert!(!recorder.was_called_with("/a/", &post));
        let calls = recorder.calls();
        assert_eq!(calls[0].url, "/a/");
        assert_eq!(recorder.last_call().unwrap().url, "/b/");
    }

    #[rstest]
    fn test_recorder_clones_share_history() {
        let recorder = MockRecorder::new();
        let handle = recorder.clone();
        recorder.record("/a/", &RequestOptions::new());
        assert_eq!(handle.call_count(), 1);
    }
}
