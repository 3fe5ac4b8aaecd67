//! In-memory document store.

use super::{encode_document, DocumentStore, StoreError, StoreResult};
use crate::model::project::Document;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// Store that keeps the serialized document text in memory.
///
/// Content goes through the same JSON encoding as the file store, so what
/// `load` returns is exactly what a file round-trip would produce.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw document text, as if read from a file.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            saves: Cell::new(0),
        }
    }

    /// Last saved text, if any.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreResult<Document> {
        match self.text.borrow().as_deref() {
            Some(text) => serde_json::from_str(text).map_err(|source| StoreError::Malformed {
                path: PathBuf::from(":memory:"),
                source,
            }),
            None => Ok(Document::new()),
        }
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let text = encode_document(document)?;
        *self.text.borrow_mut() = Some(text);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::model::project::{Document, Project};
    use crate::store::DocumentStore;

    #[test]
    fn empty_store_loads_empty_document() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().projects.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = MemoryStore::new();
        let mut document = Document::new();
        document.projects.push(Project::new("example.com"));

        store.save(&document).unwrap();
        assert_eq!(store.load().unwrap(), document);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn seeded_text_is_parsed() {
        let store = MemoryStore::with_text(r#"{"projects":[{"name":"a.com","articles":[]}]}"#);
        let document = store.load().unwrap();
        assert_eq!(document.projects[0].name, "a.com");
    }
}
