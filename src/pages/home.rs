//! Landing page with conditional calls to action.

use leptos::prelude::*;

use crate::session::state::SessionState;

/// Landing page — anonymous visitors get signup prompts, signed-in users get
/// shortcuts into the product plus their plan status.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Create Perfect Resumes with AI"</h1>
                <p class="home-page__tagline">
                    "Transform your career with AI-powered resume enhancement and professional resume building tools."
                </p>

                <Show
                    when=move || state.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <div class="home-page__actions">
                                <a href="/register" class="btn btn--primary">
                                    "Get Started Free"
                                </a>
                                <a href="/login" class="btn btn--outline">
                                    "Sign In"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <a href="/resume-enhancer" class="btn btn--primary">
                            "Enhance Your Resume"
                        </a>
                        <a href="/resume-builder" class="btn btn--outline">
                            "Build New Resume"
                        </a>
                    </div>

                    <div class="home-page__status">
                        <p>
                            "Welcome back, "
                            <span class="home-page__name">
                                {move || {
                                    state
                                        .get()
                                        .user
                                        .as_ref()
                                        .map(|user| user.display_name().to_owned())
                                        .unwrap_or_default()
                                }}
                            </span>
                            "!"
                        </p>
                        <p>
                            "Your plan: "
                            <span class="home-page__plan">
                                {move || if state.get().is_premium() { "Premium" } else { "Free" }}
                            </span>
                        </p>
                        <Show when=move || !state.get().is_premium()>
                            <a href="/pricing" class="home-page__upgrade">
                                "Upgrade to Premium →"
                            </a>
                        </Show>
                    </div>
                </Show>
            </section>

            <section class="home-page__features">
                <div class="home-page__feature">
                    <h3>"AI Resume Enhancement"</h3>
                    <p>"Upload an existing resume and get back an improved, ATS-friendly version."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Professional Builder"</h3>
                    <p>"Create and manage multiple resumes with premium templates and PDF export."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Simple Subscriptions"</h3>
                    <p>"Start free, upgrade when you need more, manage billing any time."</p>
                </div>
            </section>
        </div>
    }
}
