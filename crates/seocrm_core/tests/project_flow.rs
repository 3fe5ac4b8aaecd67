use seocrm_core::{
    ArticleDraft, ArticleStatus, CrmContext, DocumentStore, JsonFileStore, MemoryStore,
};

fn draft(title: &str, month: &str, status: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        month: month.to_string(),
        status: status.to_string(),
        ..ArticleDraft::default()
    }
}

#[test]
fn empty_document_add_project_and_article_with_blank_status() {
    let store = MemoryStore::with_text(r#"{"projects":[]}"#);
    let mut context = CrmContext::open(&store).unwrap();

    let index = context.projects().add("example.com").unwrap().unwrap();
    context
        .articles(index)
        .add(draft("Post 1", "2024-06", ""))
        .unwrap();

    let reloaded = store.load().unwrap();
    let articles = &reloaded.projects[0].articles;
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].status, ArticleStatus::PendingWriting);
    assert_eq!(articles[0].title, "Post 1");
}

#[test]
fn project_order_follows_inserts_and_deletes() {
    let mut context = CrmContext::open(MemoryStore::new()).unwrap();
    let mut expected: Vec<String> = Vec::new();

    for name in ["a.com", "b.com", "c.com", "d.com"] {
        context.projects().add(name).unwrap();
        expected.push(name.to_string());
    }
    context.projects().delete(0).unwrap();
    expected.remove(0);
    context.projects().add("e.com").unwrap();
    expected.push("e.com".to_string());
    context.projects().delete(2).unwrap();
    expected.remove(2);

    assert_eq!(context.projects().names(), expected);
    assert_eq!(context.projects().names(), vec!["b.com", "c.com", "e.com"]);
}

#[test]
fn every_mutation_is_visible_in_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    {
        let mut context = CrmContext::open(JsonFileStore::new(&path)).unwrap();
        context.projects().add("a.com").unwrap();
        context.projects().rename(0, "b.com").unwrap();
        let id = context
            .articles(0)
            .add(draft("Post", "2024-06", "Pending Approval"))
            .unwrap();
        context
            .articles(0)
            .update(id, draft("Post", "2024-07", "Published"))
            .unwrap();
    }

    let reopened = CrmContext::open(JsonFileStore::new(&path)).unwrap();
    let project = &reopened.document().projects[0];
    assert_eq!(project.name, "b.com");
    assert_eq!(project.articles[0].month, "2024-07");
    assert_eq!(project.articles[0].status, ArticleStatus::Published);
}

#[test]
fn legacy_file_without_ids_gets_stable_ids_after_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{"projects":[{"name":"old.com","articles":[
            {"title":"A","keyword":"k","out_anchor":"","out_target":"","in_anchor":"",
             "in_source":"","month":"2023-02","status":"Needs review"}]}]}"#,
    )
    .unwrap();

    let context = CrmContext::open(JsonFileStore::new(&path)).unwrap();
    let id = context.document().projects[0].articles[0].id;
    assert_eq!(
        context.document().projects[0].articles[0].status,
        ArticleStatus::Custom("Needs review".to_string())
    );
    context.close().unwrap();

    let reopened = CrmContext::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(reopened.document().projects[0].articles[0].id, id);
}
