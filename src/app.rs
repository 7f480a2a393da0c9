//! Root application component with routing and session context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::components::protected_route::Protected;
use crate::pages::builder::ResumeBuilderPage;
use crate::pages::enhancer::ResumeEnhancerPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::payment_cancel::PaymentCancelPage;
use crate::pages::payment_success::PaymentSuccessPage;
use crate::pages::pricing::PricingPage;
use crate::pages::register::RegisterPage;
use crate::session::Session;
use crate::session::guard::RouteRequirement;

/// Root application component.
///
/// Provides the session context, runs the startup token check, and declares
/// the route table with access requirements for the gated routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session.state());
    provide_context(session.clone());

    #[cfg(feature = "browser")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.initialize().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/resumeai.css"/>
        <Title text="ResumeAI"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("success"))
                        view=PaymentSuccessPage
                    />
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("cancel"))
                        view=PaymentCancelPage
                    />
                    <Route
                        path=StaticSegment("resume-enhancer")
                        view=|| {
                            view! {
                                <Protected requirement=RouteRequirement::AUTHENTICATED>
                                    <ResumeEnhancerPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("resume-builder")
                        view=|| {
                            view! {
                                <Protected requirement=RouteRequirement::PREMIUM>
                                    <ResumeBuilderPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
