//! Article use-case service for one project.
//!
//! # Responsibility
//! - Provide add/edit over a project's article list.
//! - Build the per-month (title, status) rows shown by the project screen.
//!
//! # Invariants
//! - Add appends; edit replaces the record with the same id at the same
//!   position. Nothing else in the list moves.
//! - Blank status on a draft is stored as `Pending Writing`.

use crate::model::article::{Article, ArticleDraft, ArticleId};
use crate::model::project::Project;
use crate::service::context::CrmContext;
use crate::service::{ServiceError, ServiceResult};
use crate::store::DocumentStore;
use log::info;

/// One row of a month table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub id: ArticleId,
    pub title: String,
    pub status: String,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            status: article.status.label().to_string(),
        }
    }
}

/// Months whose views must be refreshed after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthChange {
    pub previous: String,
    pub current: String,
}

impl MonthChange {
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }

    /// Distinct months to refresh, original month first.
    pub fn months(&self) -> Vec<&str> {
        if self.moved() {
            vec![self.previous.as_str(), self.current.as_str()]
        } else {
            vec![self.previous.as_str()]
        }
    }
}

/// Article use-cases for the project at one list position.
pub struct ArticleService<'ctx, S: DocumentStore> {
    context: &'ctx mut CrmContext<S>,
    project_index: usize,
}

impl<'ctx, S: DocumentStore> ArticleService<'ctx, S> {
    pub fn new(context: &'ctx mut CrmContext<S>, project_index: usize) -> Self {
        Self {
            context,
            project_index,
        }
    }

    pub fn project(&self) -> ServiceResult<&Project> {
        self.context
            .document()
            .projects
            .get(self.project_index)
            .ok_or(ServiceError::ProjectNotFound(self.project_index))
    }

    fn project_mut(&mut self) -> ServiceResult<&mut Project> {
        let index = self.project_index;
        self.context
            .document_mut()
            .projects
            .get_mut(index)
            .ok_or(ServiceError::ProjectNotFound(index))
    }

    pub fn get(&self, id: ArticleId) -> ServiceResult<&Article> {
        self.project()?
            .article(id)
            .ok_or(ServiceError::ArticleNotFound(id))
    }

    /// Rows for the articles scheduled in `month`, in list order.
    pub fn rows_for_month(&self, month: &str) -> ServiceResult<Vec<ArticleRow>> {
        Ok(self
            .project()?
            .articles_in_month(month)
            .map(ArticleRow::from)
            .collect())
    }

    /// Rows for articles whose month is none of `months`.
    pub fn rows_outside(&self, months: &[String]) -> ServiceResult<Vec<ArticleRow>> {
        Ok(self
            .project()?
            .articles
            .iter()
            .filter(|article| !months.contains(&article.month))
            .map(ArticleRow::from)
            .collect())
    }

    /// Appends a record built from `draft` and saves.
    pub fn add(&mut self, draft: ArticleDraft) -> ServiceResult<ArticleId> {
        let article = Article::from_draft(draft);
        let id = article.id;
        let project = self.project_mut()?;
        project.articles.push(article);
        let count = project.articles.len();
        self.context.commit()?;

        info!(
            "event=article_add module=service status=ok project_index={} article_id={} articles={}",
            self.project_index, id, count
        );
        Ok(id)
    }

    /// Replaces the record with `id` in place and saves.
    ///
    /// The returned `MonthChange` names both the original and the new month
    /// so callers can refresh every affected view.
    pub fn update(&mut self, id: ArticleId, draft: ArticleDraft) -> ServiceResult<MonthChange> {
        let project = self.project_mut()?;
        let position = project
            .article_position(id)
            .ok_or(ServiceError::ArticleNotFound(id))?;

        let replacement = Article::with_id(id, draft);
        let change = MonthChange {
            previous: project.articles[position].month.clone(),
            current: replacement.month.clone(),
        };
        project.articles[position] = replacement;
        self.context.commit()?;

        info!(
            "event=article_update module=service status=ok project_index={} article_id={} moved={}",
            self.project_index,
            id,
            change.moved()
        );
        Ok(change)
    }
}
