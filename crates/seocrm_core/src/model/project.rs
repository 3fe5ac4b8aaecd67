//! Project and document models.
//!
//! # Responsibility
//! - Define the persisted document root and the projects it owns.
//!
//! # Invariants
//! - `Document::projects` is always present; a missing key loads as empty.
//! - Article order inside a project is insertion order and is never
//!   rearranged by core code.

use crate::model::article::{Article, ArticleId};
use serde::{Deserialize, Serialize};

/// A tracked website with its own article backlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name, usually the domain. Not unique.
    pub name: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Project {
    /// Creates a project with an empty article list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            articles: Vec::new(),
        }
    }

    /// Returns the position of the article with `id`, if present.
    pub fn article_position(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|article| article.id == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Articles scheduled for `month`, in list order.
    pub fn articles_in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |article| article.month == month)
    }
}

/// Root of the persisted file: `{"projects": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Project};
    use crate::model::article::{Article, ArticleDraft};

    fn article(month: &str, title: &str) -> Article {
        Article::from_draft(ArticleDraft {
            title: title.to_string(),
            month: month.to_string(),
            ..ArticleDraft::default()
        })
    }

    #[test]
    fn missing_projects_key_loads_as_empty() {
        let document: Document = serde_json::from_str("{}").unwrap();
        assert!(document.projects.is_empty());
    }

    #[test]
    fn project_without_articles_key_loads_as_empty() {
        let project: Project = serde_json::from_str(r#"{"name":"example.com"}"#).unwrap();
        assert_eq!(project.name, "example.com");
        assert!(project.articles.is_empty());
    }

    #[test]
    fn articles_in_month_keeps_list_order() {
        let mut project = Project::new("example.com");
        project.articles.push(article("2024-06", "a"));
        project.articles.push(article("2024-07", "b"));
        project.articles.push(article("2024-06", "c"));

        let titles: Vec<&str> = project
            .articles_in_month("2024-06")
            .map(|article| article.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn article_position_finds_by_id() {
        let mut project = Project::new("example.com");
        project.articles.push(article("2024-06", "a"));
        project.articles.push(article("2024-06", "b"));
        let id = project.articles[1].id;

        assert_eq!(project.article_position(id), Some(1));
        assert_eq!(project.article(id).map(|a| a.title.as_str()), Some("b"));
        assert_eq!(project.article_position(uuid::Uuid::new_v4()), None);
    }
}
