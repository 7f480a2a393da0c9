//! Post-checkout cancellation landing page.

use leptos::prelude::*;

/// Payment cancel page — static reassurance plus routes back into the app.
#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    view! {
        <div class="payment-page">
            <div class="payment-page__card">
                <div class="payment-page__icon payment-page__icon--cancel">"!"</div>
                <h1>"Payment Cancelled"</h1>
                <p class="payment-page__lede">
                    "No worries! Your payment was cancelled and no charges were made to your account."
                </p>

                <div class="payment-page__actions">
                    <a href="/pricing" class="btn btn--primary">
                        "Try Again"
                    </a>
                    <a href="/resume-enhancer" class="btn btn--outline">
                        "Continue with Free Features"
                    </a>
                    <a href="/" class="payment-page__home-link">
                        "Return to Home"
                    </a>
                </div>
            </div>
        </div>
    }
}
