use super::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Smith".to_owned(),
        password1: "secret123".to_owned(),
        password2: "secret123".to_owned(),
    }
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn valid_form_has_no_errors() {
    assert!(validate_registration(&valid_form()).is_empty());
}

#[test]
fn short_username_is_rejected() {
    let mut form = valid_form();
    form.username = "al".to_owned();
    let errors = validate_registration(&form);
    assert_eq!(
        errors.get("username"),
        Some(&"Username must be at least 3 characters long".to_owned())
    );
}

#[test]
fn missing_username_is_rejected() {
    let mut form = valid_form();
    form.username = "  ".to_owned();
    assert_eq!(
        validate_registration(&form).get("username"),
        Some(&"Username is required".to_owned())
    );
}

#[test]
fn implausible_email_is_rejected() {
    for email in ["plainaddress", "missing@dot", "@nolocal.com", "x@.start"] {
        let mut form = valid_form();
        form.email = email.to_owned();
        assert_eq!(
            validate_registration(&form).get("email"),
            Some(&"Please enter a valid email address".to_owned()),
            "email {email:?}"
        );
    }
}

#[test]
fn missing_names_are_rejected() {
    let mut form = valid_form();
    form.first_name = String::new();
    form.last_name = String::new();
    let errors = validate_registration(&form);
    assert_eq!(
        errors.get("first_name"),
        Some(&"First name is required".to_owned())
    );
    assert_eq!(
        errors.get("last_name"),
        Some(&"Last name is required".to_owned())
    );
}

#[test]
fn short_password_is_rejected() {
    let mut form = valid_form();
    form.password1 = "short".to_owned();
    form.password2 = "short".to_owned();
    assert_eq!(
        validate_registration(&form).get("password1"),
        Some(&"Password must be at least 8 characters long".to_owned())
    );
}

#[test]
fn mismatched_passwords_are_rejected() {
    let mut form = valid_form();
    form.password2 = "different1".to_owned();
    assert_eq!(
        validate_registration(&form).get("password2"),
        Some(&"Passwords do not match".to_owned())
    );
}

#[test]
fn missing_confirmation_is_rejected() {
    let mut form = valid_form();
    form.password2 = String::new();
    assert_eq!(
        validate_registration(&form).get("password2"),
        Some(&"Please confirm your password".to_owned())
    );
}

// =============================================================
// Backend rejection mapping
// =============================================================

#[test]
fn backend_field_errors_land_on_fields() {
    let error = ApiError::Fields(BTreeMap::from([(
        "email".to_owned(),
        "already taken".to_owned(),
    )]));
    let mapped = apply_rejection(&error);
    assert_eq!(mapped.get("email"), Some(&"already taken".to_owned()));
    assert!(!mapped.contains_key(GENERAL_ERROR));
}

#[test]
fn backend_messages_land_on_general() {
    let error = ApiError::Message("Registration failed".to_owned());
    let mapped = apply_rejection(&error);
    assert_eq!(
        mapped.get(GENERAL_ERROR),
        Some(&"Registration failed".to_owned())
    );
}

// =============================================================
// Email plausibility
// =============================================================

#[test]
fn plausible_emails_are_accepted() {
    for email in ["a@b.com", "first.last@sub.domain.org"] {
        assert!(is_plausible_email(email), "email {email:?}");
    }
}
