//! Login page with a username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

/// Validate and normalize the login form.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page — a successful sign-in navigates home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
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
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "browser")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&credentials).await {
                    Ok(_) => {
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.summary());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = &credentials;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign in to your account"</h2>
                <p class="auth-card__subtitle">
                    "Or "
                    <a href="/register" class="auth-card__link">
                        "create a new account"
                    </a>
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__banner">
                            <p>{move || error.get()}</p>
                        </div>
                    </Show>

                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            placeholder="Your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
