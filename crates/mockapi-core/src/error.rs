//! Errors raised by the mock client.

use crate::config::error::ConfigError;
use crate::types::request::HttpMethod;
use crate::types::response::ErrorResponse;
use regex::Regex;
use std::backtrace::Backtrace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    /// No registered fixture matched the request.
    ///
    /// `stack` holds the captured backtrace trimmed to start at the first
    /// test frame, so it points at the test that needs the fixture.
    #[error("No mocked response found for request: {method} {url}")]
    UnmockedRequest {
        method: HttpMethod,
        url: String,
        stack: String,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MockError {
    pub(crate) fn unmocked(method: HttpMethod, url: &str, test_frame: &Regex) -> Self {
        let header = format!("No mocked response found for request: {method} {url}");
        let trace = Backtrace::force_capture().to_string();
        let stack = trim_stack(&header, &trace, test_frame);
        MockError::UnmockedRequest {
            method,
            url: url.to_string(),
            stack,
        }
    }

    pub fn stack(&self) -> Option<&str> {
        match self {
            MockError::UnmockedRequest { stack, .. } => Some(stack),
            MockError::Config(_) => None,
        }
    }
}

/// Rejection value of a promise-style request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request failed with status {}", .0.status)]
    Response(ErrorResponse),
    /// The request was dropped without an answer (e.g. it was never mocked).
    #[error("Request was dropped without a response")]
    Cancelled,
}

/// Drop backtrace frames above the first one that belongs to test code.
///
/// Frames in a rendered backtrace span two lines: the symbol line and an
/// `at path:line` line. When the match lands on the location line the frame's
/// symbol line is kept too. Without any test frame the whole trace is kept.
pub fn trim_stack(header: &str, trace: &str, test_frame: &Regex) -> String {
    let lines: Vec<&str> = trace.lines().collect();
    let start = match lines.iter().position(|line| test_frame.is_match(line)) {
        Some(i) if i > 0 && lines[i].trim_start().starts_with("at ") => i - 1,
        Some(i) => i,
        None => 0,
    };

    let mut stack = String::with_capacity(trace.len() + header.len() + 1);
    stack.push_str(header);
    for line in &lines[start..] {
        stack.push('\n');
        stack.push_str(line);
    }
    stack
}
