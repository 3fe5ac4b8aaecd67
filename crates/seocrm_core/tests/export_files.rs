use seocrm_core::{
    export_project_csv, export_project_json, import_project_json, with_default_extension,
    ArticleDraft, CrmContext, MemoryStore, Project, CSV_HEADER,
};

fn sample_project() -> Project {
    let mut context = CrmContext::open(MemoryStore::new()).unwrap();
    context.projects().add("example.com").unwrap();
    for (title, month) in [("Post 1", "2024-06"), ("Post 2", "2024-07"), ("Post 3", "2024-06")] {
        context
            .articles(0)
            .add(ArticleDraft {
                title: title.to_string(),
                keyword: "seo tools".to_string(),
                out_anchor: "best tools".to_string(),
                out_target: "https://example.com/tools".to_string(),
                month: month.to_string(),
                status: "Pending Approval".to_string(),
                ..ArticleDraft::default()
            })
            .unwrap();
    }
    context.document().projects[0].clone()
}

#[test]
fn json_export_reads_back_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = with_default_extension(dir.path().join("example"), "json");
    assert!(path.ends_with("example.json"));

    let project = sample_project();
    export_project_json(&project, &path).unwrap();
    let imported = import_project_json(&path).unwrap();

    assert_eq!(imported, project);
}

#[test]
fn csv_export_has_fixed_header_and_one_row_per_article() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.csv");

    let project = sample_project();
    export_project_csv(&project, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), 8);
    assert_eq!(header.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), project.articles.len());
    let titles: Vec<&str> = rows.iter().map(|row| &row[0]).collect();
    assert_eq!(titles, vec!["Post 1", "Post 2", "Post 3"]);
    assert_eq!(&rows[0][3], "https://example.com/tools");
    assert_eq!(&rows[0][4], "");
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");
    assert!(export_project_json(&sample_project(), &path).is_err());
}
