//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serializer output so serde decoding stays
//! lossless. Open string sets (subscription status, resume status) stay
//! strings rather than enums because the backend may grow values without a
//! client release.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as returned by `GET /api/auth/user/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Plan identifier (`"free"`, `"premium"`, ...).
    #[serde(default = "default_subscription_status")]
    pub subscription_status: String,
}

fn default_subscription_status() -> String {
    "free".to_owned()
}

impl User {
    /// Preferred short name for greetings.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }
}

/// Token pair plus user snapshot returned by login and registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form payload; field names follow the backend's contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password1: String,
    pub password2: String,
}

/// A resume document summary from the builder backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub title: String,
    /// `"draft"` until the document is ready to export, then `"completed"`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Resume {
    /// Only completed resumes can be exported as PDF.
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// One improvement the enhancer applied to an uploaded resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub title: String,
    pub description: String,
}

/// Response to a successful enhancement upload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnhancedResume {
    pub id: i64,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
}

/// Checkout redirect target from the billing backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

/// Billing-portal redirect target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PortalSession {
    pub url: String,
}

/// Checkout creation payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub success_url: String,
    pub cancel_url: String,
}
