//! Session lifecycle state machine and its operation flows.
//!
//! DESIGN
//! ======
//! `SessionManager` applies synchronous transitions only, so the credential
//! pair and the in-memory user always change together in one step. The async
//! flows perform the network call first and hand the outcome to the manager
//! afterwards; overlapping submissions therefore resolve last-wins instead of
//! contending for a borrow across an await point.
//!
//! ERROR HANDLING
//! ==============
//! Every flow returns a tagged `ApiError` result; nothing panics or throws
//! past this module. A failed startup check or profile refresh demotes the
//! session to anonymous and clears stored tokens (fail closed).

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::RefCell;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials, RegistrationForm, User};

use super::state::{SessionPhase, SessionState};
use super::tokens::{TokenPair, TokenStore};

/// Owner of the process-wide session state.
pub struct SessionManager<S: TokenStore> {
    tokens: S,
    state: SessionState,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(tokens: S) -> Self {
        Self {
            tokens,
            state: SessionState::default(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Enter `Checking` and report whether stored credentials exist.
    ///
    /// With no stored pair the session resolves straight to `Anonymous` and
    /// the caller must not issue a profile fetch.
    pub fn begin_check(&mut self) -> bool {
        self.state.phase = SessionPhase::Checking;
        if self.tokens.load().is_some() {
            true
        } else {
            self.state.phase = SessionPhase::Anonymous;
            false
        }
    }

    /// Resolve the startup check with the profile-fetch outcome.
    pub fn complete_check(&mut self, outcome: Result<User, ApiError>) {
        match outcome {
            Ok(user) => {
                self.state.user = Some(user);
                self.state.phase = SessionPhase::Authenticated;
            }
            // Stale tokens must not linger against an anonymous session.
            Err(_) => self.logout(),
        }
    }

    /// Apply a login outcome; tokens and user land in one synchronous step.
    pub fn complete_login(
        &mut self,
        outcome: Result<AuthResponse, ApiError>,
    ) -> Result<User, ApiError> {
        self.complete_auth(outcome)
    }

    /// Apply a registration outcome.
    pub fn complete_register(
        &mut self,
        outcome: Result<AuthResponse, ApiError>,
    ) -> Result<User, ApiError> {
        self.complete_auth(outcome)
    }

    fn complete_auth(
        &mut self,
        outcome: Result<AuthResponse, ApiError>,
    ) -> Result<User, ApiError> {
        let response = outcome?;
        self.tokens.save(&TokenPair {
            access: response.access_token,
            refresh: response.refresh_token,
        });
        self.state.user = Some(response.user.clone());
        self.state.phase = SessionPhase::Authenticated;
        Ok(response.user)
    }

    /// Apply a profile-refresh outcome.
    ///
    /// Success replaces the user wholesale; failure demotes to `Anonymous`.
    pub fn complete_refresh(&mut self, outcome: Result<User, ApiError>) -> Result<User, ApiError> {
        match outcome {
            Ok(user) => {
                self.state.user = Some(user.clone());
                self.state.phase = SessionPhase::Authenticated;
                Ok(user)
            }
            Err(err) => {
                self.logout();
                Err(err)
            }
        }
    }

    /// Drop credentials and identity unconditionally. Idempotent.
    pub fn logout(&mut self) {
        self.tokens.clear();
        self.state.user = None;
        self.state.phase = SessionPhase::Anonymous;
    }
}

/// Resolve the startup token check against the auth backend.
pub async fn initialize<S: TokenStore, A: AuthApi>(manager: &RefCell<SessionManager<S>>, api: &A) {
    if !manager.borrow_mut().begin_check() {
        return;
    }
    let outcome = api.fetch_profile().await;
    manager.borrow_mut().complete_check(outcome);
}

/// Exchange credentials for a fresh token pair and user snapshot.
pub async fn login<S: TokenStore, A: AuthApi>(
    manager: &RefCell<SessionManager<S>>,
    api: &A,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    let outcome = api.login(credentials).await;
    manager.borrow_mut().complete_login(outcome)
}

/// Create an account and open a session in one step.
pub async fn register<S: TokenStore, A: AuthApi>(
    manager: &RefCell<SessionManager<S>>,
    api: &A,
    form: &RegistrationForm,
) -> Result<User, ApiError> {
    let outcome = api.register(form).await;
    manager.borrow_mut().complete_register(outcome)
}

/// Re-pull the user snapshot, e.g. after billing changed entitlement.
pub async fn refresh_profile<S: TokenStore, A: AuthApi>(
    manager: &RefCell<SessionManager<S>>,
    api: &A,
) -> Result<User, ApiError> {
    let outcome = api.fetch_profile().await;
    manager.borrow_mut().complete_refresh(outcome)
}
