//! Authorization checkpoint wrapping gated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Applies `session::guard::decide` on every session change. While the
//! startup check is resolving it renders a neutral placeholder; redirects
//! replace the history entry so back-navigation cannot loop into the guarded
//! page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::guard::{RouteDecision, RouteRequirement, decide};
use crate::session::state::SessionState;

/// Wraps a route's view and enforces its access requirement.
#[component]
pub fn Protected(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| decide(&state.get(), requirement));

    Effect::new(move || {
        let target = match decision.get() {
            RouteDecision::RedirectToLogin => "/login",
            RouteDecision::RedirectToPricing => "/pricing",
            RouteDecision::Wait | RouteDecision::Render => return,
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    view! {
        <Show
            when=move || decision.get() == RouteDecision::Render
            fallback=move || {
                view! {
                    <div class="route-guard__placeholder">
                        <div class="loading-spinner"></div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
