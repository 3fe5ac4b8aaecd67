//! File-backed document store.

use super::{encode_document, DocumentStore, StoreError, StoreResult};
use crate::model::project::Document;
use log::{debug, error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Document store backed by one JSON file.
///
/// No locking and no atomic rename: two processes writing the same file
/// lose updates, and a crash mid-write can leave a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StoreResult<Document> {
        let started_at = Instant::now();
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=store status=ok source=empty");
                return Ok(Document::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let document: Document = serde_json::from_str(&text).map_err(|source| {
            error!(
                "event=store_load module=store status=error error_code=malformed error={}",
                source
            );
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "event=store_load module=store status=ok source=file projects={} duration_ms={}",
            document.projects.len(),
            started_at.elapsed().as_millis()
        );
        Ok(document)
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let started_at = Instant::now();
        let text = encode_document(document)?;
        if let Err(err) = std::fs::write(&self.path, text.as_bytes()) {
            error!(
                "event=store_save module=store status=error error_code=write_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        debug!(
            "event=store_save module=store status=ok projects={} bytes={} duration_ms={}",
            document.projects.len(),
            text.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileStore;
    use crate::model::project::{Document, Project};
    use crate::store::{DocumentStore, StoreError};

    #[test]
    fn load_missing_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        assert_eq!(store.load().unwrap(), Document::new());
    }

    #[test]
    fn save_writes_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::new(&path);

        let mut document = Document::new();
        document.projects.push(Project::new("example.com"));
        store.save(&document).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"projects\": [\n    {\n      \"name\": \"example.com\""));
        assert!(text.ends_with("}\n"));
        assert_eq!(store.load().unwrap(), document);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("data.json"));
        let err = store.save(&Document::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
