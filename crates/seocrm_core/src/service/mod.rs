//! Use-case services over the shared document.
//!
//! # Responsibility
//! - Apply project and article mutations to the in-memory document.
//! - Persist the whole document after every successful mutation.
//!
//! # Invariants
//! - Screens reach the document only through an explicit `CrmContext`.
//! - A no-op (blank input) never triggers a save.

use crate::model::article::ArticleId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_service;
pub mod context;
pub mod project_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from project and article use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// No project at the given list position.
    ProjectNotFound(usize),
    /// No article with the given id in the selected project.
    ArticleNotFound(ArticleId),
    /// Persisting the document failed.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(index) => write!(f, "project not found at position {index}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
