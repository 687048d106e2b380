//! Error types for configuration and fixture file loading.

use thiserror::Error;

/// Configuration parsing error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid test frame pattern: {0}")]
    FramePattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_config_error_json_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ConfigError::from(json_err);
        assert!(error.to_string().contains("JSON parsing error"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_yaml_display() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: yaml: [").unwrap_err();
        let error = ConfigError::from(yaml_err);
        assert!(error.to_string().contains("YAML parsing error"));
    }

    #[rstest]
    #[case("fixtures.txt")]
    #[case("")]
    fn test_config_error_unknown_file_type(#[case] path: &str) {
        let error = ConfigError::UnknownFileType(path.to_string());
        assert!(error.to_string().contains("Unknown file type"));
        assert!(error.to_string().contains(path));
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_config_error_io_keeps_path_and_source() {
        let error = ConfigError::Io {
            path: "fixtures/missing.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().contains("fixtures/missing.yaml"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_from_glob_pattern() {
        let pattern_err = glob::Pattern::new("[").unwrap_err();
        let error: ConfigError = pattern_err.into();
        assert!(matches!(error, ConfigError::Glob(_)));
    }
}
