//! Domain model for projects and their article backlog.
//!
//! # Responsibility
//! - Define the data structures persisted in the document file.
//!
//! # Invariants
//! - The document exclusively owns projects; each project exclusively owns
//!   its articles.
//! - Articles are identified by a stable `ArticleId`, not by position.

pub mod article;
pub mod project;
