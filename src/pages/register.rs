//! Registration page with client-side validation mirroring the backend's
//! per-field rules.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

#[cfg(any(test, feature = "browser"))]
use crate::net::error::ApiError;
use crate::net::types::RegistrationForm;

/// Key used for non-field errors in the error map.
const GENERAL_ERROR: &str = "general";

/// Loose email shape check; the backend performs the authoritative one.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Client-side validation; returns one message per offending field.
fn validate_registration(form: &RegistrationForm) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if form.username.trim().is_empty() {
        errors.insert("username".to_owned(), "Username is required".to_owned());
    } else if form.username.trim().len() < 3 {
        errors.insert(
            "username".to_owned(),
            "Username must be at least 3 characters long".to_owned(),
        );
    }

    if form.email.trim().is_empty() {
        errors.insert("email".to_owned(), "Email is required".to_owned());
    } else if !is_plausible_email(form.email.trim()) {
        errors.insert(
            "email".to_owned(),
            "Please enter a valid email address".to_owned(),
        );
    }

    if form.first_name.trim().is_empty() {
        errors.insert("first_name".to_owned(), "First name is required".to_owned());
    }
    if form.last_name.trim().is_empty() {
        errors.insert("last_name".to_owned(), "Last name is required".to_owned());
    }

    if form.password1.is_empty() {
        errors.insert("password1".to_owned(), "Password is required".to_owned());
    } else if form.password1.len() < 8 {
        errors.insert(
            "password1".to_owned(),
            "Password must be at least 8 characters long".to_owned(),
        );
    }

    if form.password2.is_empty() {
        errors.insert(
            "password2".to_owned(),
            "Please confirm your password".to_owned(),
        );
    } else if form.password1 != form.password2 {
        errors.insert("password2".to_owned(), "Passwords do not match".to_owned());
    }

    errors
}

/// Fold a backend rejection into the field-error map.
#[cfg(any(test, feature = "browser"))]
fn apply_rejection(error: &ApiError) -> BTreeMap<String, String> {
    match error {
        ApiError::Fields(fields) => fields.clone(),
        other => BTreeMap::from([(GENERAL_ERROR.to_owned(), other.summary())]),
    }
}

/// Registration page — account creation signs the user in and navigates home.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "browser")]
    let session = expect_context::<crate::session::Session>();
    #[cfg(feature = "browser")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            password1: password1.get(),
            password2: password2.get(),
        };
        let local_errors = validate_registration(&form);
        if !local_errors.is_empty() {
            errors.set(local_errors);
            return;
        }
        busy.set(true);
        errors.set(BTreeMap::new());

        #[cfg(feature = "browser")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.register(&form).await {
                    Ok(_) => {
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        errors.set(apply_rejection(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = &form;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create your account"</h2>
                <p class="auth-card__subtitle">
                    "Or "
                    <a href="/login" class="auth-card__link">
                        "sign in to your existing account"
                    </a>
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || errors.with(|map| map.contains_key(GENERAL_ERROR))>
                        <div class="auth-form__banner">
                            <p>{move || errors.with(|map| map.get(GENERAL_ERROR).cloned())}</p>
                        </div>
                    </Show>

                    <div class="auth-form__row">
                        <RegisterField
                            name="first_name"
                            label="First Name"
                            input_type="text"
                            autocomplete="given-name"
                            placeholder="First name"
                            value=first_name
                            errors=errors
                        />
                        <RegisterField
                            name="last_name"
                            label="Last Name"
                            input_type="text"
                            autocomplete="family-name"
                            placeholder="Last name"
                            value=last_name
                            errors=errors
                        />
                    </div>

                    <RegisterField
                        name="username"
                        label="Username"
                        input_type="text"
                        autocomplete="username"
                        placeholder="Choose a username"
                        value=username
                        errors=errors
                    />
                    <RegisterField
                        name="email"
                        label="Email Address"
                        input_type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        value=email
                        errors=errors
                    />
                    <RegisterField
                        name="password1"
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        placeholder="Create a password"
                        value=password1
                        errors=errors
                    />
                    <RegisterField
                        name="password2"
                        label="Confirm Password"
                        input_type="password"
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        value=password2
                        errors=errors
                    />

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// One labeled input with its field error; typing clears the error.
#[component]
fn RegisterField(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<BTreeMap<String, String>>,
) -> impl IntoView {
    view! {
        <label class="auth-form__label">
            {label}
            <input
                class="auth-form__input"
                class:auth-form__input--invalid=move || errors.with(|map| map.contains_key(name))
                type=input_type
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|map| {
                        map.remove(name);
                    });
                }
            />
            {move || {
                errors
                    .with(|map| map.get(name).cloned())
                    .map(|message| view! { <p class="auth-form__error">{message}</p> })
            }}
        </label>
    }
}
