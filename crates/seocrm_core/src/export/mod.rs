//! Project exporters.
//!
//! # Responsibility
//! - Write one project as pretty JSON or as an 8-column CSV sheet.
//! - Read a project JSON file back for import.
//!
//! # Invariants
//! - Exporters never touch the document store.
//! - CSV rows follow article list order; one row per article.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod csv_sheet;
pub mod json;

pub use csv_sheet::{export_project_csv, write_project_csv, CSV_HEADER};
pub use json::{export_project_json, import_project_json, read_project_json, write_project_json};

pub type ExportResult<T> = Result<T, ExportError>;

/// Export/import failure.
#[derive(Debug)]
pub enum ExportError {
    /// Writing to a caller-supplied writer failed; no path is known.
    Write(std::io::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write(err) => write!(f, "failed to write export: {err}"),
            Self::Io { path, source } => write!(f, "export file `{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "project json: {err}"),
            Self::Csv(err) => write!(f, "project csv: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Appends `.{extension}` when `path` has no extension of its own.
pub fn with_default_extension(path: impl AsRef<Path>, extension: &str) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Attaches `path` to a pathless write failure.
fn at_path(path: &Path, err: ExportError) -> ExportError {
    match err {
        ExportError::Write(source) => io_error(path, source),
        other => other,
    }
}
