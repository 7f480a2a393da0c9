use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn resume_endpoints_format_expected_paths() {
    assert_eq!(resume_endpoint(42), "/api/resumebuilder/resumes/42/");
    assert_eq!(
        resume_download_endpoint(42),
        "/api/resumebuilder/resumes/42/download/"
    );
}

// =============================================================
// List body shapes
// =============================================================

fn resume_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Software Engineer Resume",
        "status": "draft",
        "created_at": "2025-11-02T10:00:00Z",
        "updated_at": "2025-11-03T10:00:00Z"
    })
}

#[test]
fn plain_array_body_parses() {
    let body = serde_json::json!([resume_json(1), resume_json(2)]);
    let resumes = parse_resume_list(&body).expect("parses");
    assert_eq!(resumes.len(), 2);
    assert_eq!(resumes[0].id, 1);
}

#[test]
fn paginated_body_parses() {
    let body = serde_json::json!({ "count": 1, "results": [resume_json(9)] });
    let resumes = parse_resume_list(&body).expect("parses");
    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0].id, 9);
}

#[test]
fn empty_results_parse_to_empty_list() {
    let body = serde_json::json!({ "results": [] });
    assert_eq!(parse_resume_list(&body), Some(Vec::new()));
}

#[test]
fn unexpected_shapes_are_rejected() {
    assert_eq!(parse_resume_list(&serde_json::json!({"count": 0})), None);
    assert_eq!(parse_resume_list(&serde_json::json!("nope")), None);
    // An item missing required fields poisons the whole parse.
    let body = serde_json::json!([{ "title": "no id" }]);
    assert_eq!(parse_resume_list(&body), None);
}
