//! Mock client settings.

use crate::config::error::ConfigError;
use crate::config::parser::read_config;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches backtrace lines that belong to test code: files under a `tests/`
/// directory or functions inside a `tests` module.
pub const DEFAULT_TEST_FRAME_PATTERN: &str = r"(^|[/\\])tests[/\\]|::tests::";

/// Settings for [`MockClient`](crate::mocks::client::MockClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    /// Post every response callback to the event queue instead of running it inline
    #[serde(default)]
    pub mock_async: bool,
    /// Regex selecting the first backtrace line kept in unmocked-request errors
    #[serde(default = "default_test_frame_pattern")]
    pub test_frame_pattern: String,
}

fn default_test_frame_pattern() -> String {
    DEFAULT_TEST_FRAME_PATTERN.to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            mock_async: false,
            test_frame_pattern: default_test_frame_pattern(),
        }
    }
}

impl ClientSettings {
    /// Load settings from a YAML/JSON/JSONC file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        read_config(path)
    }

    pub fn test_frame_regex(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.test_frame_pattern).map_err(ConfigError::from)
    }
}
