//! Route authorization decisions.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of the session snapshot and the route's
//! declared requirement, so every combination is table-testable. The
//! `Protected` component applies the decision; redirects replace history and
//! the requested destination is discarded.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::state::SessionState;

/// Static per-route access metadata, declared at route registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    pub requires_auth: bool,
    pub requires_premium: bool,
}

impl RouteRequirement {
    /// Open to everyone.
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_premium: false,
    };

    /// Requires a signed-in user.
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_premium: false,
    };

    /// Requires a signed-in user on a premium plan.
    pub const PREMIUM: Self = Self {
        requires_auth: true,
        requires_premium: true,
    };
}

/// What the router should do with a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup check still in flight; show a neutral placeholder and
    /// re-evaluate once the session resolves.
    Wait,
    RedirectToLogin,
    RedirectToPricing,
    Render,
}

/// Decide whether to render, defer, or redirect a navigation attempt.
pub fn decide(session: &SessionState, requirement: RouteRequirement) -> RouteDecision {
    if session.is_resolving() {
        return RouteDecision::Wait;
    }
    if requirement.requires_auth && !session.is_authenticated() {
        return RouteDecision::RedirectToLogin;
    }
    if requirement.requires_premium && !session.is_premium() {
        return RouteDecision::RedirectToPricing;
    }
    RouteDecision::Render
}
