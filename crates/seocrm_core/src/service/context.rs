//! Explicit application context shared by screens.

use crate::model::project::Document;
use crate::service::article_service::ArticleService;
use crate::service::project_service::ProjectService;
use crate::store::{DocumentStore, StoreResult};
use log::info;

/// In-memory document plus the store it is persisted to.
///
/// Owned by the top-level screen and lent to nested screens, which get
/// their services from it instead of reaching for shared global state.
pub struct CrmContext<S: DocumentStore> {
    store: S,
    document: Document,
}

impl<S: DocumentStore> CrmContext<S> {
    /// Loads the full document from `store`.
    pub fn open(store: S) -> StoreResult<Self> {
        let document = store.load()?;
        Ok(Self { store, document })
    }

    /// Read-only view of the current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Project use-cases bound to this context.
    pub fn projects(&mut self) -> ProjectService<'_, S> {
        ProjectService::new(self)
    }

    /// Article use-cases for the project at `project_index`.
    pub fn articles(&mut self, project_index: usize) -> ArticleService<'_, S> {
        ArticleService::new(self, project_index)
    }

    /// Writes the whole document through the store.
    pub fn commit(&self) -> StoreResult<()> {
        self.store.save(&self.document)
    }

    /// Final save on normal shutdown.
    pub fn close(self) -> StoreResult<()> {
        self.commit()?;
        info!(
            "event=context_close module=service status=ok projects={}",
            self.document.projects.len()
        );
        Ok(())
    }

    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}
