//! Configuration file parsing (YAML/JSON/JSONC) and fixture file loading.

use crate::config::error::ConfigError;
use crate::types::fixture::MockResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Config file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content, leaving string literals intact.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                result.push(c);
                while let Some(s) = chars.next() {
                    result.push(s);
                    match s {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                result.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                // Line comment runs up to (not including) the line break
                while let Some(&next) = chars.peek() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for s in chars.by_ref() {
                    if prev == '*' && s == '/' {
                        break;
                    }
                    prev = s;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse config content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a single config file.
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content, path)
}

/// A fixture file holds either one fixture or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Many(Vec<MockResponse>),
    One(Box<MockResponse>),
}

/// Load fixtures from every file matching a glob pattern.
///
/// Files are read in sorted path order; fixtures keep their order within a file.
pub fn load_mock_responses(pattern: &str) -> Result<Vec<MockResponse>, ConfigError> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| ConfigError::Io {
            path: e.path().display().to_string(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut responses = Vec::new();
    for path in paths {
        let path = path.display().to_string();
        let file: FixtureFile = read_config(&path)?;
        match file {
            FixtureFile::Many(list) => {
                debug!(path = %path, count = list.len(), "loaded fixture file");
                responses.extend(list);
            }
            FixtureFile::One(response) => {
                debug!(path = %path, count = 1, "loaded fixture file");
                responses.push(*response);
            }
        }
    }
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::HttpMethod;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    #[case("fixtures.yaml", ConfigFileType::Yaml)]
    #[case("fixtures.YML", ConfigFileType::Yaml)]
    #[case("fixtures.json", ConfigFileType::Json)]
    #[case("fixtures.JSONC", ConfigFileType::Jsonc)]
    #[case("fixtures.txt", ConfigFileType::Unknown)]
    #[case("fixtures", ConfigFileType::Unknown)]
    #[case("", ConfigFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: ConfigFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    #[case(r#"{"a": 1}"#, r#"{"a": 1}"#)]
    #[case("{\"a\": 1} // trailing", "{\"a\": 1} ")]
    #[case("{\"a\": /* inline */ 1}", "{\"a\":  1}")]
    #[case("// head\n{\"a\": 1}", "\n{\"a\": 1}")]
    #[case("{\"url\": \"http://x//y\"}", "{\"url\": \"http://x//y\"}")]
    #[case("{\"q\": \"say \\\"/*hi*/\\\"\"}", "{\"q\": \"say \\\"/*hi*/\\\"\"}")]
    #[case("{\"a\": 1} /* unterminated", "{\"a\": 1} ")]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[rstest]
    fn test_parse_jsonc_list_of_fixtures() {
        let content = r#"[
            // project list
            {"url": "/projects/", "body": []},
            /* failing create */
            {"url": "/projects/", "method": "POST", "statusCode": 400}
        ]"#;
        let responses: Vec<MockResponse> = parse_config(content, "f.jsonc").expect("Should parse");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1].method, Some(HttpMethod::Post));
        assert_eq!(responses[1].status, Some(400));
    }

    #[rstest]
    #[case("fixtures.txt")]
    #[case("")]
    fn test_parse_config_unknown_file_type(#[case] path: &str) {
        let result: Result<serde_json::Value, _> = parse_config("{}", path);
        assert!(matches!(result, Err(ConfigError::UnknownFileType(_))));
    }

    #[rstest]
    fn test_parse_yaml_invalid() {
        let result: Result<serde_json::Value, _> = parse_yaml("invalid: yaml: [");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[rstest]
    fn test_read_config_missing_file() {
        let result: Result<serde_json::Value, _> = read_config("/nonexistent/mockapi.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[rstest]
    fn test_load_mock_responses_single_and_list() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        fs::write(
            dir.path().join("a.yaml"),
            "- url: /projects/\n- url: /teams/\n  statusCode: 404\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.json"), r#"{"url": "/users/"}"#).unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let pattern = format!("{}/*.*json", dir.path().display());
        let json_only = load_mock_responses(&pattern).expect("Should load");
        assert_eq!(json_only.len(), 1);

        let pattern = format!("{}/*.yaml", dir.path().display());
        let yaml_only = load_mock_responses(&pattern).expect("Should load");
        let urls: Vec<_> = yaml_only.iter().map(|r| r.url.as_deref()).collect();
        assert_eq!(urls, vec![Some("/projects/"), Some("/teams/")]);
    }

    #[rstest]
    fn test_load_mock_responses_unknown_extension_fails() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        let pattern = format!("{}/*", dir.path().display());
        assert!(matches!(
            load_mock_responses(&pattern),
            Err(ConfigError::UnknownFileType(_))
        ));
    }

    #[rstest]
    fn test_load_mock_responses_bad_pattern() {
        assert!(matches!(
            load_mock_responses("fixtures/[.yaml"),
            Err(ConfigError::Glob(_))
        ));
    }
}
