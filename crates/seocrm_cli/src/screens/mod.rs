//! Interactive screens.
//!
//! Each screen receives the `CrmContext` it works on and a `Prompt`; none of
//! them hold global state.

pub mod article_form;
pub mod project_detail;
pub mod project_list;
