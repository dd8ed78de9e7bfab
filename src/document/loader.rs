//! Document loading from disk or memory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::document::schema::PathEntry;
use crate::routing::RedirectService;

/// Errors that can occur while loading a redirect document.
///
/// Both kinds surface once, at load time, and carry the underlying failure
/// unchanged. There is no retry and no partial mapping: on error the caller
/// gets no handler at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Document could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML content does not match the expected record shape.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON content does not match the expected record shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a YAML document into its records.
///
/// The top-level value must be a sequence; each element a mapping with
/// string `path` and `url` fields.
pub fn parse_yaml(document: &str) -> Result<Vec<PathEntry>, LoadError> {
    Ok(serde_yaml::from_str(document)?)
}

/// Read and parse a YAML document from a file.
///
/// The file is read to completion and released before this returns, on both
/// success and failure.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<Vec<PathEntry>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Fold records into the lookup map, in document order.
///
/// A path appearing more than once keeps the value from its last occurrence.
pub fn path_map(entries: Vec<PathEntry>) -> HashMap<String, String> {
    entries.into_iter().map(|e| (e.path, e.url)).collect()
}

/// Build a redirect handler from a YAML document on disk.
pub fn yaml_service<S>(
    path: impl AsRef<Path>,
    fallback: S,
) -> Result<RedirectService<S>, LoadError> {
    let entries = load_yaml(path)?;
    Ok(RedirectService::new(path_map(entries), fallback))
}

/// Build a redirect handler from an in-memory YAML document.
pub fn yaml_str_service<S>(document: &str, fallback: S) -> Result<RedirectService<S>, LoadError> {
    let entries = parse_yaml(document)?;
    Ok(RedirectService::new(path_map(entries), fallback))
}

/// Build a redirect handler from an in-memory JSON document.
///
/// Same record shape as the YAML form, serialized as a JSON array:
/// `[{"path": "/some-path", "url": "https://www.some-url.com/demo"}]`.
pub fn json_str_service<S>(document: &str, fallback: S) -> Result<RedirectService<S>, LoadError> {
    let entries: Vec<PathEntry> = serde_json::from_str(document)?;
    Ok(RedirectService::new(path_map(entries), fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
- path: /some-path
  url: https://www.some-url.com/demo
- path: /another-path
  url: https://www.another-url.com/
";

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shortcut-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_record_sequence() {
        let entries = parse_yaml(SAMPLE).unwrap();
        assert_eq!(
            entries,
            vec![
                PathEntry {
                    path: "/some-path".into(),
                    url: "https://www.some-url.com/demo".into(),
                },
                PathEntry {
                    path: "/another-path".into(),
                    url: "https://www.another-url.com/".into(),
                },
            ]
        );
    }

    #[test]
    fn test_last_duplicate_wins() {
        let doc = "\
- path: /dup
  url: https://first.example.com/
- path: /other
  url: https://other.example.com/
- path: /dup
  url: https://second.example.com/
";
        let map = path_map(parse_yaml(doc).unwrap());
        assert_eq!(map.len(), 2);
        assert_eq!(map["/dup"], "https://second.example.com/");
    }

    #[test]
    fn test_rejects_top_level_mapping() {
        let doc = "path: /a\nurl: https://example.com/\n";
        let err = parse_yaml(doc).unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn test_rejects_entry_missing_url() {
        let doc = "- path: /a\n";
        assert!(matches!(parse_yaml(doc), Err(LoadError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_yaml("/nonexistent/shortcut-paths.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_loads_from_file() {
        let path = write_temp("load.yaml", SAMPLE);
        let entries = load_yaml(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "/some-path");
    }

    #[test]
    fn test_malformed_document_yields_no_service() {
        let result = yaml_str_service("- path: /a\n", ());
        assert!(result.is_err());
    }

    #[test]
    fn test_json_records_parse() {
        let doc = r#"[{"path": "/j", "url": "https://json.example.com/"}]"#;
        assert!(json_str_service(doc, ()).is_ok());

        let bad = r#"{"path": "/j", "url": "https://json.example.com/"}"#;
        assert!(matches!(json_str_service(bad, ()), Err(LoadError::Json(_))));
    }
}
