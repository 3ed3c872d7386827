use super::*;

// =============================================================
// SubscriberPayload
// =============================================================

#[test]
fn subscriber_payload_reads_channel_views_row() {
    let payload: SubscriberPayload = serde_json::from_value(serde_json::json!({
        "est_sub": 13042.0,
        "table": [
            { "name": "Subscribers", "count": 13042 },
            { "name": "Channel Views", "count": 245_001 }
        ]
    }))
    .expect("payload decodes");
    assert_eq!(payload.table_count("Channel Views"), 245_001.0);
    assert_eq!(payload.table_count("Videos"), 0.0);
}

#[test]
fn subscriber_payload_requires_est_sub_and_table() {
    let missing_sub = serde_json::from_value::<SubscriberPayload>(serde_json::json!({ "table": [] }));
    assert!(missing_sub.is_err());
    let missing_table = serde_json::from_value::<SubscriberPayload>(serde_json::json!({ "est_sub": 1 }));
    assert!(missing_table.is_err());
}

#[test]
fn count_row_tolerates_bad_fields() {
    let row: CountRow = serde_json::from_value(serde_json::json!({ "name": 5, "count": "many" })).expect("row decodes");
    assert_eq!(row, CountRow { name: None, count: None });
}

// =============================================================
// BlogIndexEntry
// =============================================================

#[test]
fn blog_entry_counts_only_real_posts() {
    let entries: Vec<BlogIndexEntry> = serde_json::from_value(serde_json::json!([
        { "type": "posts", "permalink": "https://blog.zynji.my.id/posts/hello/" },
        { "type": "posts", "permalink": "https://blog.zynji.my.id/posts/" },
        { "type": "posts" },
        { "type": "posts", "permalink": "" },
        { "type": "page", "permalink": "https://blog.zynji.my.id/about/" }
    ]))
    .expect("index decodes");
    let flags = entries.iter().map(BlogIndexEntry::is_post).collect::<Vec<_>>();
    assert_eq!(flags, vec![true, false, false, false, false]);
}

// =============================================================
// ProjectEntry
// =============================================================

#[test]
fn project_entry_decodes_all_fields() {
    let entry: ProjectEntry = serde_json::from_value(serde_json::json!({
        "title": "Sandbox",
        "description": "A toy",
        "permalink": "/en/projects/sandbox/",
        "image": "/img/sandbox.png",
        "date": "2024-03-01",
        "categories": ["Web"],
        "tags": ["Rust", "WASM"],
        "icon": "fa-code",
        "readingTime": "5 min",
        "note": "Project"
    }))
    .expect("entry decodes");
    assert_eq!(entry.title.as_deref(), Some("Sandbox"));
    assert_eq!(entry.reading_time.as_deref(), Some("5 min"));
    assert_eq!(entry.tags, vec!["Rust".to_owned(), "WASM".to_owned()]);
    assert!(entry.is_project());
}

#[test]
fn project_entry_empty_object_is_default() {
    let entry: ProjectEntry = serde_json::from_value(serde_json::json!({})).expect("empty decodes");
    assert_eq!(entry, ProjectEntry::default());
    assert!(!entry.is_project());
}

#[test]
fn project_entry_degrades_wrong_typed_optionals() {
    let entry: ProjectEntry = serde_json::from_value(serde_json::json!({
        "title": null,
        "categories": "web",
        "tags": ["ok", 3, null],
        "readingTime": 4,
        "note": "project"
    }))
    .expect("lenient decode");
    assert_eq!(entry.title, None);
    assert!(entry.categories.is_empty());
    assert_eq!(entry.tags, vec!["ok".to_owned()]);
    assert_eq!(entry.reading_time, None);
    assert!(entry.is_project());
}

#[test]
fn is_project_is_case_insensitive_and_exact() {
    let with_note = |note: &str| ProjectEntry { note: Some(note.to_owned()), ..ProjectEntry::default() };
    assert!(with_note("PROJECT").is_project());
    assert!(with_note("project").is_project());
    assert!(!with_note("projects").is_project());
    assert!(!with_note("post").is_project());
}

// =============================================================
// count_from_f64
// =============================================================

#[test]
fn count_from_f64_floors_and_clamps() {
    assert_eq!(count_from_f64(12_500.9), 12_500);
    assert_eq!(count_from_f64(-4.0), 0);
    assert_eq!(count_from_f64(f64::NAN), 0);
}
