//! Core domain logic for the SEO content CRM.
//! This crate owns the document model, persistence and every mutation rule;
//! front ends only collect input and render results.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod month;
pub mod service;
pub mod store;

pub use config::CrmConfig;
pub use export::{
    export_project_csv, export_project_json, import_project_json, with_default_extension,
    ExportError, ExportResult, CSV_HEADER,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{Article, ArticleDraft, ArticleId, ArticleStatus};
pub use model::project::{Document, Project};
pub use month::{current_month_labels, is_month_label, month_labels, MONTHS_AHEAD};
pub use service::article_service::{ArticleRow, ArticleService, MonthChange};
pub use service::context::CrmContext;
pub use service::project_service::ProjectService;
pub use service::{ServiceError, ServiceResult};
pub use store::{DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
