//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the session manager and consumed by the route guard and
//! identity-aware components to coordinate redirects and conditional
//! rendering.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::User;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Application start, before the stored-token check begins.
    #[default]
    Uninitialized,
    /// Stored tokens found; the profile fetch is in flight.
    Checking,
    /// Profile fetch, login, or registration succeeded.
    Authenticated,
    /// No usable credentials.
    Anonymous,
}

/// Current user identity plus lifecycle phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
}

impl SessionState {
    /// True until the startup token check has resolved.
    pub fn is_resolving(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Uninitialized | SessionPhase::Checking
        )
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated)
    }

    /// Premium entitlement, recomputed from the current snapshot every call.
    pub fn is_premium(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.subscription_status == "premium")
    }
}
