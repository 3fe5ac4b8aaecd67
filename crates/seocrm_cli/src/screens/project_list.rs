//! Main screen: the ordered project list and its actions.

use crate::error::CliResult;
use crate::prompt::Prompt;
use crate::screens::project_detail::ProjectDetailScreen;
use seocrm_core::{import_project_json, CrmContext, DocumentStore};
use std::path::Path;

const MENU: [&str; 6] = ["Add Project", "Rename", "Delete", "Open", "Import JSON", "Quit"];

/// Top-level screen; owns nothing but a borrow of the context.
pub struct ProjectListScreen<'ctx, S: DocumentStore> {
    context: &'ctx mut CrmContext<S>,
    months: Vec<String>,
}

impl<'ctx, S: DocumentStore> ProjectListScreen<'ctx, S> {
    pub fn new(context: &'ctx mut CrmContext<S>, months: Vec<String>) -> Self {
        Self { context, months }
    }

    /// Runs until Quit (or the menu is dismissed).
    pub fn run<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        let menu: Vec<String> = MENU.iter().map(|item| item.to_string()).collect();
        loop {
            self.render(prompt);
            let Some(choice) = prompt.select("Projects", &menu)? else {
                return Ok(());
            };
            match choice {
                0 => self.add(prompt)?,
                1 => self.rename(prompt)?,
                2 => self.delete(prompt)?,
                3 => self.open(prompt)?,
                4 => self.import(prompt)?,
                _ => return Ok(()),
            }
        }
    }

    fn render<P: Prompt>(&mut self, prompt: &mut P) {
        let names = self.context.projects().names();
        if names.is_empty() {
            prompt.message("(no projects)");
        }
        for (position, name) in names.iter().enumerate() {
            prompt.message(&format!("{:>3}. {name}", position + 1));
        }
    }

    /// Current selection; `None` when the list is empty or nothing is picked.
    fn pick_project<P: Prompt>(
        &mut self,
        prompt: &mut P,
        title: &str,
    ) -> CliResult<Option<usize>> {
        let names = self.context.projects().names();
        if names.is_empty() {
            return Ok(None);
        }
        Ok(prompt.select(title, &names)?)
    }

    fn add<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        if let Some(name) = prompt.input("Enter project domain", "")? {
            self.context.projects().add(&name)?;
        }
        Ok(())
    }

    fn rename<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        let Some(index) = self.pick_project(prompt, "Rename which project?")? else {
            return Ok(());
        };
        let current = self.context.projects().get(index)?.name.clone();
        if let Some(new_name) = prompt.input("New name", &current)? {
            self.context.projects().rename(index, &new_name)?;
        }
        Ok(())
    }

    fn delete<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        let Some(index) = self.pick_project(prompt, "Delete which project?")? else {
            return Ok(());
        };
        if prompt.confirm("Are you sure?")? {
            self.context.projects().delete(index)?;
        }
        Ok(())
    }

    fn open<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        let Some(index) = self.pick_project(prompt, "Open which project?")? else {
            return Ok(());
        };
        ProjectDetailScreen::new(&mut *self.context, index, self.months.clone())
            .run(prompt)?;
        Ok(())
    }

    fn import<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        let Some(entered) = prompt.input("Import project JSON from", "")? else {
            return Ok(());
        };
        if entered.trim().is_empty() {
            return Ok(());
        }
        let project = import_project_json(Path::new(entered.trim()))?;
        self.context.projects().insert(project)?;
        Ok(())
    }
}
