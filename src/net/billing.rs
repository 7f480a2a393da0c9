//! Billing backend collaborator (checkout + subscription portal).
//!
//! The checkout and portal flows both end in a full-page redirect to the
//! payment provider; this module only creates the sessions.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{CheckoutRequest, CheckoutSession, PortalSession};

pub const CHECKOUT_ENDPOINT: &str = "/api/payments/create-checkout-session/";
pub const PORTAL_ENDPOINT: &str = "/api/payments/create-portal-session/";

/// Start a subscription purchase; the caller redirects to the returned URL.
pub async fn create_checkout_session(request: &CheckoutRequest) -> Result<CheckoutSession, ApiError> {
    http::post_json(
        CHECKOUT_ENDPOINT,
        request,
        "Failed to start checkout process. Please try again.",
    )
    .await
}

/// Open the subscription-management portal for the signed-in user.
pub async fn create_portal_session() -> Result<PortalSession, ApiError> {
    http::post_empty(
        PORTAL_ENDPOINT,
        "Failed to open billing portal. Please try again.",
    )
    .await
}
