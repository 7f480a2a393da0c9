//! Post-checkout landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The payment provider redirects here after a successful checkout. The
//! billing webhook lands asynchronously on the backend, so the page waits a
//! moment before re-reading the profile; a failed refresh is surfaced as a
//! warning rather than an error page.

use leptos::prelude::*;

/// Payment success page — refreshes entitlement once the webhook settles.
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let query = leptos_router::hooks::use_query_map();
    let session_id = Memo::new(move |_| query.with(|params| params.get("session_id")));
    let settling = RwSignal::new(true);
    let warning = RwSignal::new(String::new());

    #[cfg(feature = "browser")]
    {
        let session = expect_context::<crate::session::Session>();
        leptos::task::spawn_local(async move {
            // Give the billing webhook a moment to land before re-reading
            // entitlement.
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            if session.refresh_profile().await.is_err() {
                warning.set("Failed to update your profile. Please refresh the page.".to_owned());
            }
            settling.set(false);
        });
    }
    #[cfg(not(feature = "browser"))]
    settling.set(false);

    view! {
        <div class="payment-page">
            <Show
                when=move || !settling.get()
                fallback=move || {
                    view! {
                        <div class="payment-page__pending">
                            <div class="loading-spinner"></div>
                            <p>"Processing your payment..."</p>
                        </div>
                    }
                }
            >
                <div class="payment-page__card">
                    <div class="payment-page__icon payment-page__icon--success">"✓"</div>
                    <h1>"Payment Successful!"</h1>
                    <p class="payment-page__lede">
                        "Thank you for your purchase. Your premium subscription is now active and you have access to all premium features."
                    </p>

                    <Show when=move || !warning.get().is_empty()>
                        <div class="payment-page__warning">
                            <p>{move || warning.get()}</p>
                        </div>
                    </Show>

                    <Show when=move || session_id.get().is_some()>
                        <div class="payment-page__receipt">
                            <p>
                                <span class="payment-page__receipt-label">"Session ID: "</span>
                                {move || session_id.get().unwrap_or_default()}
                            </p>
                            <p class="payment-page__receipt-note">"Save this for your records"</p>
                        </div>
                    </Show>

                    <div class="payment-page__actions">
                        <a href="/resume-builder" class="btn btn--primary">
                            "Start Building Your Resume"
                        </a>
                        <a href="/resume-enhancer" class="btn btn--outline">
                            "Enhance Existing Resume"
                        </a>
                        <a href="/" class="payment-page__home-link">
                            "Return to Home"
                        </a>
                    </div>
                </div>
            </Show>
        </div>
    }
}
