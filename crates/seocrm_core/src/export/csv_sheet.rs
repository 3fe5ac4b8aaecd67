//! CSV project export.

use super::{at_path, io_error, ExportError, ExportResult};
use crate::model::article::Article;
use crate::model::project::Project;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed column headers, in output order.
pub const CSV_HEADER: [&str; 8] = [
    "Title",
    "Keyword",
    "Outbound Anchor",
    "Outbound Target",
    "Inbound Anchor",
    "Inbound Source",
    "Month",
    "Status",
];

fn article_record(article: &Article) -> [&str; 8] {
    [
        article.title.as_str(),
        article.keyword.as_str(),
        article.out_anchor.as_str(),
        article.out_target.as_str(),
        article.in_anchor.as_str(),
        article.in_source.as_str(),
        article.month.as_str(),
        article.status.label(),
    ]
}

/// Writes the header row and one row per article.
pub fn write_project_csv<W: Write>(project: &Project, writer: W) -> ExportResult<()> {
    let mut sheet = csv::Writer::from_writer(writer);
    sheet.write_record(CSV_HEADER)?;
    for article in &project.articles {
        sheet.write_record(article_record(article))?;
    }
    sheet.flush().map_err(ExportError::Write)
}

/// Exports `project` to the CSV file at `path`, replacing it.
pub fn export_project_csv(project: &Project, path: &Path) -> ExportResult<()> {
    let file = File::create(path).map_err(|err| io_error(path, err))?;
    write_project_csv(project, file).map_err(|err| at_path(path, err))?;
    info!(
        "event=export module=export status=ok format=csv rows={}",
        project.articles.len()
    );
    Ok(())
}
