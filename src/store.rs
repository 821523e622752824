//! JSON content store: loads a `ContentSnapshot` from disk.
//!
//! The resolution layer never touches the filesystem itself; this adapter is
//! what the preview binary uses to feed it.

use crate::content::ContentSnapshot;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a content snapshot
#[derive(Error, Debug)]
pub enum StoreError {
    /// The snapshot file could not be read
    #[error("Failed to read content snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the record schema
    #[error("Failed to parse content snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a snapshot from a JSON string.
pub fn parse_snapshot(json: &str) -> Result<ContentSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a snapshot from a JSON file.
///
/// Expected shape: `{ "articles": [...], "authors": [...], "tags": {...} }`,
/// all keys optional.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<ContentSnapshot, StoreError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = parse_snapshot(&json).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {} article records and {} author records from {}",
        snapshot.articles.len(),
        snapshot.authors.len(),
        path.display()
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "articles": [
            {
                "translationKey": "hello",
                "language": "en",
                "slug": "hello",
                "path": "blog/hello",
                "title": "Hello",
                "date": "2024-01-01",
                "tags": ["intro"]
            },
            {
                "translationKey": "hello",
                "language": "zh",
                "slug": "hello-zh",
                "path": "blog/hello-zh",
                "title": "你好",
                "date": "2024-01-01"
            }
        ],
        "authors": [
            { "translationKey": "default", "language": "en", "slug": "default", "name": "Owner" }
        ],
        "tags": { "intro": { "zh": "入门" } }
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(snapshot.articles.len(), 2);
        assert_eq!(snapshot.articles[1].language, Language::CHINESE);
        assert_eq!(snapshot.authors.len(), 1);
        assert_eq!(snapshot.tags.label("intro", Language::CHINESE), "入门");
    }

    #[test]
    fn test_parse_empty_object() {
        let snapshot = parse_snapshot("{}").unwrap();
        assert!(snapshot.articles.is_empty());
        assert!(snapshot.authors.is_empty());
        assert!(snapshot.tags.is_empty());
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.articles[0].title, "Hello");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_snapshot(temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("content.json"));
    }

    #[test]
    fn test_load_unsupported_language() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{"articles": [{"language": "es", "slug": "hola", "path": "blog/hola", "title": "Hola"}]}"#,
        )
        .unwrap();

        assert!(matches!(load_snapshot(&path), Err(StoreError::Parse { .. })));
    }
}
