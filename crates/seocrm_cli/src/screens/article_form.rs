//! Modal article form.
//!
//! Collects all eight fields and returns either a complete draft or a
//! cancellation. Nothing is written until the caller applies the draft.

use crate::prompt::{Prompt, PromptResult};
use seocrm_core::{is_month_label, ArticleDraft, ArticleStatus};

/// Form definition: the month choices offered next to the free-text entry.
pub struct ArticleForm<'a> {
    months: &'a [String],
    statuses: Vec<String>,
}

impl<'a> ArticleForm<'a> {
    pub fn new(months: &'a [String]) -> Self {
        Self {
            months,
            statuses: ArticleStatus::known_labels(),
        }
    }

    /// Draft shown by "Add article".
    pub fn blank(&self) -> ArticleDraft {
        ArticleDraft::new_with_defaults(self.months)
    }

    /// Runs the form pre-filled with `initial`.
    ///
    /// Returns `None` when any field is cancelled or the save is declined.
    pub fn fill<P: Prompt>(
        &self,
        prompt: &mut P,
        heading: &str,
        initial: &ArticleDraft,
    ) -> PromptResult<Option<ArticleDraft>> {
        prompt.message(heading);

        let text_fields = [
            ("Title", &initial.title),
            ("Keyword", &initial.keyword),
            ("Outbound Anchor", &initial.out_anchor),
            ("Outbound Target", &initial.out_target),
            ("Inbound Anchor", &initial.in_anchor),
            ("Inbound Source", &initial.in_source),
        ];
        let mut values = Vec::with_capacity(text_fields.len());
        for (label, value) in text_fields {
            match prompt.input(label, value)? {
                Some(entered) => values.push(entered),
                None => return Ok(None),
            }
        }

        let Some(month) = prompt.choose_or_type("Month", self.months, &initial.month)? else {
            return Ok(None);
        };
        if !is_month_label(&month) {
            prompt.message(&format!(
                "note: month `{month}` is not YYYY-MM; it will be listed under Other months"
            ));
        }
        let Some(status) = prompt.choose_or_type("Status", &self.statuses, &initial.status)? else {
            return Ok(None);
        };

        if !prompt.confirm("Save article?")? {
            return Ok(None);
        }

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(Some(ArticleDraft {
            title: next(),
            keyword: next(),
            out_anchor: next(),
            out_target: next(),
            in_anchor: next(),
            in_source: next(),
            month,
            status,
        }))
    }
}
