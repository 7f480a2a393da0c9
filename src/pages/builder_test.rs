use super::*;

// =============================================================
// Title validation
// =============================================================

#[test]
fn title_is_trimmed_and_accepted() {
    assert_eq!(
        validate_resume_title("  Software Engineer Resume  "),
        Ok("Software Engineer Resume".to_owned())
    );
}

#[test]
fn blank_title_is_rejected() {
    assert_eq!(
        validate_resume_title("   "),
        Err("Please enter a title for your resume.")
    );
}

// =============================================================
// Status badge
// =============================================================

fn resume(status: &str) -> Resume {
    Resume {
        id: 1,
        title: "Software Engineer Resume".to_owned(),
        status: status.to_owned(),
        created_at: "2025-11-02T10:00:00Z".to_owned(),
        updated_at: "2025-11-03T10:00:00Z".to_owned(),
    }
}

#[test]
fn completed_resumes_are_labeled_complete() {
    assert_eq!(status_label(&resume("completed")), "Complete");
}

#[test]
fn anything_else_is_labeled_draft() {
    assert_eq!(status_label(&resume("draft")), "Draft");
    assert_eq!(status_label(&resume("")), "Draft");
}
