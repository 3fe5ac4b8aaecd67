//! Whole-document persistence.
//!
//! # Responsibility
//! - Define the load/save contract for the single JSON document.
//! - Keep file-format details out of services and screens.
//!
//! # Invariants
//! - `load` of an absent backing file yields an empty document.
//! - `save` always rewrites the whole document; there are no partial writes.

use crate::model::project::Document;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for load/save.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing content is not a valid document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Document could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "document file `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "document file `{}` is malformed: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Load/save contract for the whole document.
pub trait DocumentStore {
    /// Reads the full document, or an empty one when nothing was saved yet.
    fn load(&self) -> StoreResult<Document>;
    /// Overwrites the stored document with `document`.
    fn save(&self, document: &Document) -> StoreResult<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn load(&self) -> StoreResult<Document> {
        (**self).load()
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        (**self).save(document)
    }
}

/// Serializes a document the way it is written to disk: 2-space indent and
/// a trailing newline.
pub fn encode_document(document: &Document) -> StoreResult<String> {
    let mut text = serde_json::to_string_pretty(document).map_err(StoreError::Encode)?;
    text.push('\n');
    Ok(text)
}
