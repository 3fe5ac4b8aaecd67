//! JSON project export and import.

use super::{at_path, io_error, ExportError, ExportResult};
use crate::model::project::Project;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Writes `project` as 2-space indented JSON followed by a newline.
///
/// Encoding failures are `ExportError::Json`; writer failures are
/// `ExportError::Write`.
pub fn write_project_json<W: Write>(project: &Project, mut writer: W) -> ExportResult<()> {
    let mut encoded = serde_json::to_vec_pretty(project)?;
    encoded.push(b'\n');
    writer
        .write_all(&encoded)
        .and_then(|()| writer.flush())
        .map_err(ExportError::Write)
}

/// Parses one project previously written by `write_project_json`.
pub fn read_project_json<R: Read>(reader: R) -> ExportResult<Project> {
    Ok(serde_json::from_reader(reader)?)
}

/// Exports `project` to the file at `path`, replacing it.
pub fn export_project_json(project: &Project, path: &Path) -> ExportResult<()> {
    let file = File::create(path).map_err(|err| io_error(path, err))?;
    write_project_json(project, BufWriter::new(file)).map_err(|err| at_path(path, err))?;
    info!(
        "event=export module=export status=ok format=json articles={}",
        project.articles.len()
    );
    Ok(())
}

/// Reads a project JSON file for import.
pub fn import_project_json(path: &Path) -> ExportResult<Project> {
    let file = File::open(path).map_err(|err| io_error(path, err))?;
    let project = read_project_json(BufReader::new(file))?;
    info!(
        "event=import module=export status=ok format=json articles={}",
        project.articles.len()
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::{read_project_json, write_project_json};
    use crate::export::{at_path, ExportError};
    use crate::model::article::{Article, ArticleDraft};
    use crate::model::project::Project;
    use std::io::{self, Write};
    use std::path::Path;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_failure_is_a_write_error_not_json() {
        let err = write_project_json(&Project::new("example.com"), FullDisk).unwrap_err();
        assert!(matches!(err, ExportError::Write(_)));
        assert_eq!(err.to_string(), "failed to write export: disk full");

        let located = at_path(Path::new("/out/site.json"), err);
        assert!(matches!(
            &located,
            ExportError::Io { path, .. } if path == Path::new("/out/site.json")
        ));
        assert!(located.to_string().contains("/out/site.json"));
    }

    #[test]
    fn output_is_single_project_object() {
        let mut project = Project::new("example.com");
        project.articles.push(Article::from_draft(ArticleDraft {
            title: "Post 1".to_string(),
            month: "2024-06".to_string(),
            ..ArticleDraft::default()
        }));

        let mut buffer = Vec::new();
        write_project_json(&project, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["name"], "example.com");
        assert_eq!(value["articles"][0]["title"], "Post 1");
        assert_eq!(value["articles"][0]["status"], "Pending Writing");
        assert!(String::from_utf8(buffer).unwrap().contains("\n  \"articles\""));
    }

    #[test]
    fn reading_garbage_fails() {
        assert!(read_project_json("[1, 2]".as_bytes()).is_err());
    }
}
