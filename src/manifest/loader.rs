//! Reading and parsing `library.json`

use std::path::Path;

use serde_json::error::Category;
use tracing::debug;

use crate::config::DEFAULT_MANIFEST_PATH;
use crate::manifest::error::ManifestError;
use crate::manifest::types::Manifest;

/// Load `library.json` from the current working directory.
pub fn load_default() -> Result<Manifest, ManifestError> {
    load(DEFAULT_MANIFEST_PATH)
}

/// Read the whole file at `path` and parse it into a [`Manifest`].
pub fn load(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    debug!("Reading manifest from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, path)
}

/// Parse manifest content; `path` is only used for error reporting.
///
/// Syntax errors and truncated input map to [`ManifestError::Malformed`],
/// well-formed JSON with missing or mistyped keys to [`ManifestError::Schema`].
pub fn parse(content: &str, path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref().to_path_buf();

    serde_json::from_str(content).map_err(|source| match source.classify() {
        Category::Data => ManifestError::Schema { path, source },
        Category::Io | Category::Syntax | Category::Eof => {
            ManifestError::Malformed { path, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::types::DependencyRecord;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn load_reads_manifest_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        std::fs::write(
            &path,
            r#"{"version":"1.2.3","dependencies":[{"name":"tinywot","version":"4.5.6"}]}"#,
        )
        .unwrap();

        let manifest = load(&path).unwrap();

        assert_eq!(
            manifest,
            Manifest {
                version: "1.2.3".to_string(),
                dependencies: vec![DependencyRecord {
                    name: "tinywot".to_string(),
                    version: Some("4.5.6".to_string()),
                }],
            }
        );
    }

    #[test]
    fn load_returns_io_error_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");

        let err = load(&path).unwrap_err();

        match err {
            ManifestError::Io { path: err_path, source } => {
                assert_eq!(err_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("{")]
    #[case(r#"{"version": "1.0.0", "dependencies": [}"#)]
    #[case("not json at all")]
    #[case(r#"{"version": "1.0.0",}"#)]
    fn parse_reports_malformed_json(#[case] content: &str) {
        let err = parse(content, "library.json").unwrap_err();

        assert!(
            matches!(err, ManifestError::Malformed { .. }),
            "expected Malformed, got {err:?}"
        );
    }

    #[rstest]
    #[case(r#"{"dependencies": []}"#)]
    #[case(r#"{"version": "1.0.0"}"#)]
    #[case(r#"{"version": "1.0.0", "dependencies": {}}"#)]
    #[case(r#"{"version": "1.0.0", "dependencies": "tinywot"}"#)]
    #[case(r#"{"version": 1, "dependencies": []}"#)]
    #[case(r#"{"version": "1.0.0", "dependencies": [{"version": "1.0.0"}]}"#)]
    #[case(r#"[]"#)]
    fn parse_reports_schema_errors(#[case] content: &str) {
        let err = parse(content, "library.json").unwrap_err();

        assert!(
            matches!(err, ManifestError::Schema { .. }),
            "expected Schema, got {err:?}"
        );
    }

    #[test]
    fn parse_error_message_names_the_manifest_path() {
        let err = parse(r#"{"dependencies": []}"#, "project/library.json").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("project/library.json"), "{message}");
        assert!(!message.contains("missing field"), "{message}");

        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("missing field `version`"), "{source}");
    }
}
