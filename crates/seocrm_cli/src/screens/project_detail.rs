//! Project screen: month tabs, article add/edit and exports.
//!
//! # Invariants
//! - Tab contents are cached and only change through `MonthTabs::refresh`.
//! - An edit refreshes the original month and, when it moved, the new one.

use crate::error::CliResult;
use crate::prompt::Prompt;
use crate::screens::article_form::ArticleForm;
use seocrm_core::{
    export_project_csv, export_project_json, with_default_extension, ArticleId, ArticleRow,
    ArticleService, CrmContext, DocumentStore,
};
use std::collections::BTreeMap;

/// Tab holding articles whose month is none of the generated labels.
pub const OTHER_MONTHS: &str = "Other months";

/// Cached (title, status) rows per month tab.
#[derive(Debug, Default)]
pub struct MonthTabs {
    labels: Vec<String>,
    rows: BTreeMap<String, Vec<ArticleRow>>,
}

impl MonthTabs {
    fn load<S: DocumentStore>(
        labels: Vec<String>,
        articles: &ArticleService<'_, S>,
    ) -> CliResult<Self> {
        let mut tabs = Self {
            labels,
            rows: BTreeMap::new(),
        };
        for label in tabs.labels.clone() {
            tabs.refresh(&label, articles)?;
        }
        tabs.refresh(OTHER_MONTHS, articles)?;
        Ok(tabs)
    }

    /// Reloads one tab. Months that have no tab refresh the overflow tab.
    fn refresh<S: DocumentStore>(
        &mut self,
        month: &str,
        articles: &ArticleService<'_, S>,
    ) -> CliResult<()> {
        if self.labels.iter().any(|label| label == month) {
            let rows = articles.rows_for_month(month)?;
            self.rows.insert(month.to_string(), rows);
        } else {
            let rows = articles.rows_outside(&self.labels)?;
            self.rows.insert(OTHER_MONTHS.to_string(), rows);
        }
        Ok(())
    }

    pub fn rows(&self, tab: &str) -> &[ArticleRow] {
        self.rows.get(tab).map(Vec::as_slice).unwrap_or_default()
    }

    /// Tab names in display order; the overflow tab only when non-empty.
    pub fn tab_names(&self) -> Vec<String> {
        let mut names = self.labels.clone();
        if !self.rows(OTHER_MONTHS).is_empty() {
            names.push(OTHER_MONTHS.to_string());
        }
        names
    }
}

#[derive(Clone, Copy)]
enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

enum Action {
    Tab(String),
    AddArticle,
    Export(ExportFormat),
    Back,
}

/// Screen for the project at one list position.
pub struct ProjectDetailScreen<'ctx, S: DocumentStore> {
    context: &'ctx mut CrmContext<S>,
    project_index: usize,
    months: Vec<String>,
}

impl<'ctx, S: DocumentStore> ProjectDetailScreen<'ctx, S> {
    pub fn new(
        context: &'ctx mut CrmContext<S>,
        project_index: usize,
        months: Vec<String>,
    ) -> Self {
        Self {
            context,
            project_index,
            months,
        }
    }

    /// Runs until the user goes back; returns the final tab cache.
    pub fn run<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<MonthTabs> {
        let mut tabs = MonthTabs::load(self.months.clone(), &self.articles())?;
        let name = self.articles().project()?.name.clone();

        loop {
            let mut actions: Vec<Action> = Vec::new();
            let mut items: Vec<String> = Vec::new();
            for tab in tabs.tab_names() {
                items.push(format!("{tab} ({})", tabs.rows(&tab).len()));
                actions.push(Action::Tab(tab));
            }
            for (label, action) in [
                ("Add Article", Action::AddArticle),
                ("Export JSON", Action::Export(ExportFormat::Json)),
                ("Export CSV", Action::Export(ExportFormat::Csv)),
                ("Back", Action::Back),
            ] {
                items.push(label.to_string());
                actions.push(action);
            }

            let Some(choice) = prompt.select(&name, &items)? else {
                return Ok(tabs);
            };
            match actions.swap_remove(choice) {
                Action::Tab(tab) => self.open_tab(prompt, &mut tabs, &tab)?,
                Action::AddArticle => self.add_article(prompt, &mut tabs)?,
                Action::Export(format) => self.export(prompt, format)?,
                Action::Back => return Ok(tabs),
            }
        }
    }

    fn articles(&mut self) -> ArticleService<'_, S> {
        self.context.articles(self.project_index)
    }

    fn open_tab<P: Prompt>(
        &mut self,
        prompt: &mut P,
        tabs: &mut MonthTabs,
        tab: &str,
    ) -> CliResult<()> {
        let rows = tabs.rows(tab);
        if rows.is_empty() {
            prompt.message(&format!("{tab}: no articles"));
            return Ok(());
        }
        let items: Vec<String> = rows
            .iter()
            .map(|row| format!("{:<48} {}", row.title, row.status))
            .collect();
        let ids: Vec<ArticleId> = rows.iter().map(|row| row.id).collect();

        match prompt.select(&format!("{tab}: Title / Status"), &items)? {
            Some(position) => self.edit_article(prompt, tabs, ids[position]),
            None => Ok(()),
        }
    }

    fn add_article<P: Prompt>(&mut self, prompt: &mut P, tabs: &mut MonthTabs) -> CliResult<()> {
        let form = ArticleForm::new(&self.months);
        let Some(draft) = form.fill(prompt, "Add Article", &form.blank())? else {
            return Ok(());
        };

        let month = draft.month.clone();
        let mut articles = self.context.articles(self.project_index);
        articles.add(draft)?;
        tabs.refresh(&month, &articles)?;
        Ok(())
    }

    fn edit_article<P: Prompt>(
        &mut self,
        prompt: &mut P,
        tabs: &mut MonthTabs,
        id: ArticleId,
    ) -> CliResult<()> {
        let current = self.articles().get(id)?.to_draft();
        let form = ArticleForm::new(&self.months);
        let Some(draft) = form.fill(prompt, "Edit Article", &current)? else {
            return Ok(());
        };

        let mut articles = self.context.articles(self.project_index);
        let change = articles.update(id, draft)?;
        for month in change.months() {
            tabs.refresh(month, &articles)?;
        }
        Ok(())
    }

    fn export<P: Prompt>(&mut self, prompt: &mut P, format: ExportFormat) -> CliResult<()> {
        let extension = format.extension();
        let Some(entered) = prompt.input(&format!("Export {extension} to"), "")? else {
            return Ok(());
        };
        if entered.trim().is_empty() {
            return Ok(());
        }

        let path = with_default_extension(entered.trim(), extension);
        let articles = self.articles();
        let project = articles.project()?;
        match format {
            ExportFormat::Json => export_project_json(project, &path)?,
            ExportFormat::Csv => export_project_csv(project, &path)?,
        }
        prompt.message(&format!("Exported to {}", path.display()));
        Ok(())
    }
}
