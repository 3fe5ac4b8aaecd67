//! Production calendar month labels.
//!
//! # Responsibility
//! - Produce the `YYYY-MM` labels offered as month tabs and form choices.
//!
//! # Invariants
//! - The first label is always the month of the reference date.
//! - Labels advance by exactly one calendar month; none is skipped or
//!   repeated.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of months offered by the project screen and the article form.
pub const MONTHS_AHEAD: usize = 12;

static MONTH_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("valid month label regex"));

/// Returns `count` consecutive month labels starting at `reference`'s month.
pub fn month_labels(reference: NaiveDate, count: usize) -> Vec<String> {
    let start = i64::from(reference.year()) * 12 + i64::from(reference.month0());
    (0..count as i64)
        .map(|offset| {
            let index = start + offset;
            format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
        })
        .collect()
}

/// Twelve month labels starting from the current local month.
pub fn current_month_labels() -> Vec<String> {
    month_labels(Local::now().date_naive(), MONTHS_AHEAD)
}

/// Whether `text` looks like a `YYYY-MM` label.
///
/// The article form uses this to flag free-form months; month input is
/// never rejected.
pub fn is_month_label(text: &str) -> bool {
    MONTH_LABEL_RE.is_match(text)
}
