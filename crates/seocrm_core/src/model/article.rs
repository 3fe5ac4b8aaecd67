//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record stored inside a project.
//! - Map workflow status labels to a typed status without rejecting
//!   free-form values.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the record and never reused.
//! - A blank status always resolves to `ArticleStatus::PendingWriting`.
//! - Status serializes as its human-readable label.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one article record.
pub type ArticleId = Uuid;

/// Workflow stage of an article.
///
/// The chooser offers the three known stages, but any other text typed by the
/// user is preserved as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    /// Planned, nobody has written it yet.
    #[default]
    PendingWriting,
    /// Written and waiting for the client.
    PendingApproval,
    /// Live on the site.
    Published,
    /// Free-form status outside the known set.
    ///
    /// Build it through `from_label`. A hand-built value holding a blank or
    /// known label is still labelled and serialized like `from_label` would
    /// resolve it.
    Custom(String),
}

impl ArticleStatus {
    /// The known stages in chooser order.
    pub const KNOWN: [ArticleStatus; 3] = [
        ArticleStatus::PendingWriting,
        ArticleStatus::PendingApproval,
        ArticleStatus::Published,
    ];

    /// Resolves a label entered by the user or read from disk.
    ///
    /// Blank input (after trim) falls back to the default stage. Known labels
    /// match exactly; anything else is kept verbatim.
    pub fn from_label(label: &str) -> Self {
        if label.trim().is_empty() {
            return Self::default();
        }
        match label {
            "Pending Writing" => Self::PendingWriting,
            "Pending Approval" => Self::PendingApproval,
            "Published" => Self::Published,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::PendingWriting => "Pending Writing",
            Self::PendingApproval => "Pending Approval",
            Self::Published => "Published",
            Self::Custom(value) if value.trim().is_empty() => "Pending Writing",
            Self::Custom(value) => value.as_str(),
        }
    }

    /// The value `from_label` gives for this status's label.
    pub fn normalized(&self) -> Self {
        match self {
            Self::Custom(value) => Self::from_label(value),
            known => known.clone(),
        }
    }

    /// Labels of the known stages, for choosers.
    pub fn known_labels() -> Vec<String> {
        Self::KNOWN
            .iter()
            .map(|status| status.label().to_string())
            .collect()
    }
}

impl Display for ArticleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ArticleStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ArticleStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .map(Self::from_label)
            .unwrap_or_default())
    }
}

/// One planned or published content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Generated on load for legacy records that were saved without one.
    #[serde(default = "Uuid::new_v4")]
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keyword: String,
    /// Anchor text of the link pointing out of this article.
    #[serde(default)]
    pub out_anchor: String,
    /// URL the outbound link points to.
    #[serde(default)]
    pub out_target: String,
    /// Anchor text of the link pointing into this article.
    #[serde(default)]
    pub in_anchor: String,
    /// Page that carries the inbound link.
    #[serde(default)]
    pub in_source: String,
    /// Scheduled month, normally `YYYY-MM`; not validated.
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub status: ArticleStatus,
}

impl Article {
    /// Builds a new record with a generated id from confirmed form values.
    pub fn from_draft(draft: ArticleDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Builds a record with a caller-provided id.
    ///
    /// Used by the edit path, where identity must survive the replacement.
    pub fn with_id(id: ArticleId, draft: ArticleDraft) -> Self {
        Self {
            id,
            title: draft.title,
            keyword: draft.keyword,
            out_anchor: draft.out_anchor,
            out_target: draft.out_target,
            in_anchor: draft.in_anchor,
            in_source: draft.in_source,
            month: draft.month,
            status: ArticleStatus::from_label(&draft.status),
        }
    }

    /// Converts back into editable form values.
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            keyword: self.keyword.clone(),
            out_anchor: self.out_anchor.clone(),
            out_target: self.out_target.clone(),
            in_anchor: self.in_anchor.clone(),
            in_source: self.in_source.clone(),
            month: self.month.clone(),
            status: self.status.label().to_string(),
        }
    }
}

/// Raw values of the article form before they become a record.
///
/// Every field is free text; `status` is resolved through
/// `ArticleStatus::from_label` when the draft is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub keyword: String,
    pub out_anchor: String,
    pub out_target: String,
    pub in_anchor: String,
    pub in_source: String,
    pub month: String,
    pub status: String,
}

impl ArticleDraft {
    /// Defaults shown when adding an article: first offered month and the
    /// default status, every text field empty.
    pub fn new_with_defaults(months: &[String]) -> Self {
        Self {
            month: months.first().cloned().unwrap_or_default(),
            status: ArticleStatus::default().label().to_string(),
            ..Self::default()
        }
    }
}
