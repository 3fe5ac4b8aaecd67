//! Project use-case service.
//!
//! # Responsibility
//! - Provide add/rename/delete/open/import over the ordered project list.
//!
//! # Invariants
//! - List order is insertion order; delete removes exactly one position and
//!   shifts later positions down by one.
//! - Empty names are no-ops and do not save.

use crate::model::project::Project;
use crate::service::context::CrmContext;
use crate::service::{ServiceError, ServiceResult};
use crate::store::DocumentStore;
use log::info;

/// Project use-cases bound to one context.
pub struct ProjectService<'ctx, S: DocumentStore> {
    context: &'ctx mut CrmContext<S>,
}

impl<'ctx, S: DocumentStore> ProjectService<'ctx, S> {
    pub fn new(context: &'ctx mut CrmContext<S>) -> Self {
        Self { context }
    }

    /// Project names in list order.
    pub fn names(&self) -> Vec<String> {
        self.context
            .document()
            .projects
            .iter()
            .map(|project| project.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.context.document().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the project at `index`.
    pub fn get(&self, index: usize) -> ServiceResult<&Project> {
        self.context
            .document()
            .projects
            .get(index)
            .ok_or(ServiceError::ProjectNotFound(index))
    }

    /// Appends an empty project and saves.
    ///
    /// Returns the new position, or `None` when `name` is empty.
    pub fn add(&mut self, name: &str) -> ServiceResult<Option<usize>> {
        if name.is_empty() {
            return Ok(None);
        }

        let projects = &mut self.context.document_mut().projects;
        projects.push(Project::new(name));
        let index = projects.len() - 1;
        self.context.commit()?;

        info!(
            "event=project_add module=service status=ok index={} projects={}",
            index,
            index + 1
        );
        Ok(Some(index))
    }

    /// Appends an already-built project (import path) and saves.
    pub fn insert(&mut self, project: Project) -> ServiceResult<usize> {
        let articles = project.articles.len();
        let projects = &mut self.context.document_mut().projects;
        projects.push(project);
        let index = projects.len() - 1;
        self.context.commit()?;

        info!(
            "event=project_import module=service status=ok index={} articles={}",
            index, articles
        );
        Ok(index)
    }

    /// Replaces the name at `index` and saves.
    ///
    /// Returns `false` without saving when `new_name` is empty.
    pub fn rename(&mut self, index: usize, new_name: &str) -> ServiceResult<bool> {
        let project = self
            .context
            .document_mut()
            .projects
            .get_mut(index)
            .ok_or(ServiceError::ProjectNotFound(index))?;
        if new_name.is_empty() {
            return Ok(false);
        }

        project.name = new_name.to_string();
        self.context.commit()?;

        info!("event=project_rename module=service status=ok index={}", index);
        Ok(true)
    }

    /// Removes the project at `index`, saves, and returns it.
    pub fn delete(&mut self, index: usize) -> ServiceResult<Project> {
        let projects = &mut self.context.document_mut().projects;
        if index >= projects.len() {
            return Err(ServiceError::ProjectNotFound(index));
        }

        let removed = projects.remove(index);
        let remaining = projects.len();
        self.context.commit()?;

        info!(
            "event=project_delete module=service status=ok index={} articles={} projects={}",
            index,
            removed.articles.len(),
            remaining
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::context::CrmContext;
    use crate::service::ServiceError;
    use crate::store::MemoryStore;

    #[test]
    fn add_appends_in_order_and_saves() {
        let store = MemoryStore::new();
        let mut context = CrmContext::open(&store).unwrap();
        let mut projects = context.projects();

        assert_eq!(projects.add("a.com").unwrap(), Some(0));
        assert_eq!(projects.add("b.com").unwrap(), Some(1));
        assert_eq!(projects.names(), vec!["a.com", "b.com"]);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn empty_name_is_noop() {
        let store = MemoryStore::new();
        let mut context = CrmContext::open(&store).unwrap();

        assert_eq!(context.projects().add("").unwrap(), None);
        assert!(context.projects().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rename_in_place() {
        let store = MemoryStore::new();
        let mut context = CrmContext::open(&store).unwrap();
        let mut projects = context.projects();
        projects.add("a.com").unwrap();
        projects.add("b.com").unwrap();

        assert!(projects.rename(0, "renamed.com").unwrap());
        assert!(!projects.rename(1, "").unwrap());
        assert_eq!(projects.names(), vec!["renamed.com", "b.com"]);
        assert_eq!(store.save_count(), 3);
    }

    #[test]
    fn delete_shifts_later_positions_down() {
        let mut context = CrmContext::open(MemoryStore::new()).unwrap();
        let mut projects = context.projects();
        for name in ["a.com", "b.com", "c.com"] {
            projects.add(name).unwrap();
        }

        let removed = projects.delete(1).unwrap();
        assert_eq!(removed.name, "b.com");
        assert_eq!(projects.names(), vec!["a.com", "c.com"]);
        assert_eq!(projects.get(1).unwrap().name, "c.com");
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let mut context = CrmContext::open(MemoryStore::new()).unwrap();
        let mut projects = context.projects();

        assert!(matches!(
            projects.delete(0),
            Err(ServiceError::ProjectNotFound(0))
        ));
        assert!(matches!(
            projects.rename(3, "x"),
            Err(ServiceError::ProjectNotFound(3))
        ));
        assert!(matches!(projects.get(0), Err(ServiceError::ProjectNotFound(0))));
    }
}
