use super::*;

// =============================================================
// parse_rejection
// =============================================================

#[test]
fn detail_payload_becomes_message() {
    let parsed = parse_rejection(r#"{"detail": "Invalid credentials."}"#, "Login failed");
    assert_eq!(parsed, ApiError::Message("Invalid credentials.".to_owned()));
}

#[test]
fn field_map_with_message_lists_keeps_first_message() {
    let body = r#"{"email": ["already taken", "second"], "username": ["too short"]}"#;
    let parsed = parse_rejection(body, "Registration failed");
    let ApiError::Fields(fields) = parsed else {
        panic!("expected field errors");
    };
    assert_eq!(fields.get("email"), Some(&"already taken".to_owned()));
    assert_eq!(fields.get("username"), Some(&"too short".to_owned()));
}

#[test]
fn field_map_with_plain_strings_is_accepted() {
    let parsed = parse_rejection(r#"{"email": "already taken"}"#, "Registration failed");
    assert_eq!(
        parsed,
        ApiError::Fields(BTreeMap::from([(
            "email".to_owned(),
            "already taken".to_owned()
        )]))
    );
}

#[test]
fn non_json_body_falls_back() {
    let parsed = parse_rejection("<html>502</html>", "Login failed");
    assert_eq!(parsed, ApiError::Message("Login failed".to_owned()));
}

#[test]
fn empty_object_falls_back() {
    let parsed = parse_rejection("{}", "Login failed");
    assert_eq!(parsed, ApiError::Message("Login failed".to_owned()));
}

#[test]
fn detail_wins_over_other_keys() {
    let body = r#"{"detail": "Throttled.", "email": ["ignored"]}"#;
    assert_eq!(
        parse_rejection(body, "fallback"),
        ApiError::Message("Throttled.".to_owned())
    );
}

// =============================================================
// summary
// =============================================================

#[test]
fn summary_of_fields_returns_a_field_message() {
    let error = ApiError::Fields(BTreeMap::from([(
        "email".to_owned(),
        "already taken".to_owned(),
    )]));
    assert_eq!(error.summary(), "already taken");
}

#[test]
fn display_matches_summary() {
    let error = ApiError::Transport("connection refused".to_owned());
    assert_eq!(error.to_string(), "connection refused");
}
