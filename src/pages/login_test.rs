use super::*;

#[test]
fn valid_input_is_trimmed_and_accepted() {
    let credentials = validate_login_input("  alice  ", "secret123").expect("valid");
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "secret123");
}

#[test]
fn blank_username_is_rejected() {
    assert_eq!(
        validate_login_input("   ", "secret123"),
        Err("Enter both username and password.")
    );
}

#[test]
fn blank_password_is_rejected() {
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn password_is_not_trimmed() {
    let credentials = validate_login_input("alice", " spaced ").expect("valid");
    assert_eq!(credentials.password, " spaced ");
}
