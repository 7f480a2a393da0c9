//! Auth backend collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session flows are generic over `AuthApi` so unit tests can drive them
//! with a scripted backend; `HttpAuthApi` is the REST implementation the
//! browser runtime uses.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{AuthResponse, Credentials, RegistrationForm, User};

pub const PROFILE_ENDPOINT: &str = "/api/auth/user/";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login/";
pub const REGISTRATION_ENDPOINT: &str = "/api/auth/registration/";

/// The auth backend as seen by the session manager.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn fetch_profile(&self) -> Result<User, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
    async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse, ApiError>;
}

/// REST implementation used by the browser runtime.
///
/// The bearer credential is attached by the shared `http` helpers from the
/// token store; this type stays stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn fetch_profile(&self) -> Result<User, ApiError> {
        http::get_json(PROFILE_ENDPOINT, "Session check failed").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        http::post_json(LOGIN_ENDPOINT, credentials, "Login failed").await
    }

    async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse, ApiError> {
        http::post_json(REGISTRATION_ENDPOINT, form, "Registration failed").await
    }
}
