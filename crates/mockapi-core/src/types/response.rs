//! Response objects handed to request callbacks.

use serde_json::Value;
use std::collections::HashMap;

/// Response accessor passed to success callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    status: u16,
    headers: HashMap<String, String>,
}

impl ResponseMeta {
    pub fn new(status: u16, headers: HashMap<String, String>) -> Self {
        Self { status, headers }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Look up a response header by its exact registered name.
    pub fn get_response_header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// Synthesized failure response for fixtures with a non-success status.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code of the fixture
    pub status: u16,
    /// Body serialized as JSON text
    pub response_text: String,
    /// Body as a JSON value
    pub response_json: Value,
    headers: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(status: u16, body: Value, headers: HashMap<String, String>) -> Self {
        Self {
            status,
            response_text: body.to_string(),
            response_json: body,
            headers,
        }
    }

    pub fn get_response_header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}
