//! Pricing page with the plan catalog and checkout entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Subscribing hands the browser to the payment provider's hosted checkout;
//! the success/cancel URLs route back into `/payment/*` so the session can
//! re-read entitlement afterwards.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "browser"))]
use crate::net::types::CheckoutRequest;
use crate::session::state::SessionState;

/// A paid subscription plan shown on the pricing grid.
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    /// Price identifier configured in the billing backend.
    pub price_id: &'static str,
}

/// Paid plan catalog.
pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: "$9.99",
        period: "/month",
        description: "Perfect for job seekers getting started",
        features: &[
            "AI Resume Enhancement",
            "3 Resume Downloads per month",
            "Basic Templates",
            "Email Support",
            "ATS-Friendly Formats",
        ],
        popular: false,
        price_id: "price_starter_monthly",
    },
    Plan {
        id: "pro",
        name: "Pro",
        price: "$19.99",
        period: "/month",
        description: "Most popular choice for professionals",
        features: &[
            "Everything in Starter",
            "Professional Resume Builder",
            "Unlimited Downloads",
            "Premium Templates",
            "Cover Letter Builder",
            "Priority Support",
        ],
        popular: true,
        price_id: "price_pro_monthly",
    },
    Plan {
        id: "business",
        name: "Business",
        price: "$39.99",
        period: "/month",
        description: "Advanced features for career professionals",
        features: &[
            "Everything in Pro",
            "Advanced AI Insights",
            "Multiple Resume Versions",
            "Interview Preparation Tools",
            "Dedicated Account Manager",
        ],
        popular: false,
        price_id: "price_business_monthly",
    },
];

/// Build the checkout payload for a plan, routing back to `/payment/*`.
#[cfg(any(test, feature = "browser"))]
fn checkout_request(price_id: &str, origin: &str) -> CheckoutRequest {
    CheckoutRequest {
        price_id: price_id.to_owned(),
        success_url: format!("{origin}/payment/success"),
        cancel_url: format!("{origin}/payment/cancel"),
    }
}

/// Pricing page — free plan, paid grid, and a short FAQ.
#[component]
pub fn PricingPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let loading_plan = RwSignal::new(None::<&'static str>);
    let error = RwSignal::new(String::new());
    let navigate = leptos_router::hooks::use_navigate();

    let on_subscribe = move |plan: &'static Plan| {
        if !state.get_untracked().is_authenticated() {
            navigate("/login", leptos_router::NavigateOptions::default());
            return;
        }
        if loading_plan.get().is_some() {
            return;
        }
        loading_plan.set(Some(plan.id));
        error.set(String::new());

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            let request = checkout_request(plan.price_id, &origin);
            match crate::net::billing::create_checkout_session(&request).await {
                Ok(checkout) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&checkout.checkout_url);
                    }
                }
                Err(err) => {
                    error.set(err.summary());
                    loading_plan.set(None);
                }
            }
        });
    };

    view! {
        <div class="pricing-page">
            <header class="pricing-page__header">
                <h1>"Choose Your Plan"</h1>
                <p>
                    "Unlock the full potential of AI-powered resume building. Start with the free features or upgrade for premium capabilities."
                </p>
                <Show when=move || state.get().is_premium()>
                    <div class="pricing-page__premium-banner">
                        <p>"You're currently on a Premium plan! Thank you for being a valued member."</p>
                    </div>
                </Show>
            </header>

            <Show when=move || !error.get().is_empty()>
                <div class="pricing-page__error">
                    <p>{move || error.get()}</p>
                </div>
            </Show>

            <section class="pricing-page__free">
                <div class="plan-card">
                    <h3>"Free Plan"</h3>
                    <p class="plan-card__price">
                        <span>"$0"</span>
                        "/forever"
                    </p>
                    <p class="plan-card__description">"Get started with basic resume enhancement"</p>
                    <ul class="plan-card__features">
                        <li>"AI Resume Enhancement"</li>
                        <li>"1 Resume Download per month"</li>
                        <li>"Basic Support"</li>
                    </ul>
                    <Show
                        when=move || state.get().is_authenticated()
                        fallback=move || {
                            view! {
                                <a href="/register" class="btn btn--outline">
                                    "Get Started Free"
                                </a>
                            }
                        }
                    >
                        <p class="plan-card__current">"You're using the free plan"</p>
                    </Show>
                </div>
            </section>

            <section class="pricing-page__grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let on_subscribe = on_subscribe.clone();
                        let not_popular = !plan.popular;
                        view! {
                            <div class="plan-card" class:plan-card--popular=plan.popular>
                                <Show when=move || plan.popular>
                                    <span class="plan-card__ribbon">"Most Popular"</span>
                                </Show>
                                <h3>{plan.name}</h3>
                                <p class="plan-card__price">
                                    <span>{plan.price}</span>
                                    {plan.period}
                                </p>
                                <p class="plan-card__description">{plan.description}</p>
                                <ul class="plan-card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <button
                                    class="btn"
                                    class:btn--primary=plan.popular
                                    class:btn--outline=not_popular
                                    disabled=move || {
                                        loading_plan.get() == Some(plan.id) || state.get().is_premium()
                                    }
                                    on:click=move |_| on_subscribe(plan)
                                >
                                    {move || {
                                        if loading_plan.get() == Some(plan.id) {
                                            "Processing...".to_owned()
                                        } else if state.get().is_premium() {
                                            "Current Plan".to_owned()
                                        } else {
                                            format!("Choose {}", plan.name)
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="pricing-page__faq">
                <h2>"Frequently Asked Questions"</h2>
                <div class="pricing-page__faq-grid">
                    <div>
                        <h3>"Can I cancel my subscription anytime?"</h3>
                        <p>
                            "Yes. You keep access to premium features until the end of your billing period."
                        </p>
                    </div>
                    <div>
                        <h3>"Can I change my plan later?"</h3>
                        <p>
                            "Absolutely. Upgrades and downgrades are reflected in your next billing cycle."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
