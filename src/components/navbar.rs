//! Top navigation bar with identity-aware links and billing access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session snapshot to branch between anonymous and signed-in
//! layouts; the product links only appear once authenticated, and Manage
//! Billing only for premium users.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::session::state::SessionState;

/// Badge text for the user's current plan.
fn plan_label(premium: bool) -> &'static str {
    if premium { "Premium" } else { "Free" }
}

/// Short greeting shown next to the logout button.
fn greeting(user: &User) -> String {
    format!("Hi, {}", user.display_name())
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "browser")]
    let session = expect_context::<crate::session::Session>();
    let billing_busy = RwSignal::new(false);

    let on_logout = move |_| {
        #[cfg(feature = "browser")]
        {
            session.logout();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    let on_manage_billing = move |_| {
        if billing_busy.get() {
            return;
        }
        billing_busy.set(true);

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            match crate::net::billing::create_portal_session().await {
                Ok(portal) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&portal.url);
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("billing portal failed: {err}");
                    billing_busy.set(false);
                }
            }
        });
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "ResumeAI"
            </a>

            <div class="navbar__links">
                <a href="/" class="navbar__link">
                    "Home"
                </a>
                <Show when=move || state.get().is_authenticated()>
                    <a href="/resume-enhancer" class="navbar__link">
                        "Resume Enhancer"
                    </a>
                    <a href="/resume-builder" class="navbar__link">
                        "Resume Builder"
                    </a>
                </Show>
                <a href="/pricing" class="navbar__link">
                    "Pricing"
                </a>
            </div>

            <div class="navbar__session">
                <Show
                    when=move || state.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <a href="/login" class="navbar__link">
                                "Login"
                            </a>
                            <a href="/register" class="btn btn--primary">
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <span
                        class="navbar__badge"
                        class:navbar__badge--premium=move || state.get().is_premium()
                    >
                        {move || plan_label(state.get().is_premium())}
                    </span>

                    <Show when=move || state.get().is_premium()>
                        <button
                            class="navbar__billing"
                            on:click=on_manage_billing
                            disabled=move || billing_busy.get()
                        >
                            {move || if billing_busy.get() { "Loading..." } else { "Manage Billing" }}
                        </button>
                    </Show>

                    <span class="navbar__greeting">
                        {move || state.get().user.as_ref().map(greeting).unwrap_or_default()}
                    </span>

                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
