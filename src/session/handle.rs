//! Clonable session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the session manager for the browser runtime: operations run against
//! the real auth backend, and every completed operation publishes a state
//! snapshot into an `RwSignal`. Pages and the route guard subscribe to that
//! signal rather than reaching into the manager.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::auth::HttpAuthApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, RegistrationForm, User};

use super::manager::{self, SessionManager};
use super::state::SessionState;
use super::tokens::BrowserTokenStore;

/// Handle to the process-wide session, provided via context at the app root.
#[derive(Clone)]
pub struct Session {
    manager: Rc<RefCell<SessionManager<BrowserTokenStore>>>,
    api: HttpAuthApi,
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            manager: Rc::new(RefCell::new(SessionManager::new(BrowserTokenStore))),
            api: HttpAuthApi,
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive snapshot of the session; updated after every operation.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Run the startup token check. Called once from the app root.
    pub async fn initialize(&self) {
        manager::initialize(&self.manager, &self.api).await;
        self.publish();
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let result = manager::login(&self.manager, &self.api, credentials).await;
        self.publish();
        result
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<User, ApiError> {
        let result = manager::register(&self.manager, &self.api, form).await;
        self.publish();
        result
    }

    /// Re-pull the user snapshot; failure demotes the session to anonymous.
    pub async fn refresh_profile(&self) -> Result<User, ApiError> {
        let result = manager::refresh_profile(&self.manager, &self.api).await;
        self.publish();
        result
    }

    /// Synchronous and unconditional; never fails.
    pub fn logout(&self) {
        self.manager.borrow_mut().logout();
        self.publish();
    }

    fn publish(&self) {
        self.state.set(self.manager.borrow().state().clone());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
