use super::*;

use std::cell::Cell;

use futures::executor::block_on;

use crate::session::tokens::MemoryTokenStore;

fn user(subscription_status: &str) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Smith".to_owned(),
        email: "alice@example.com".to_owned(),
        subscription_status: subscription_status.to_owned(),
    }
}

fn auth_response(subscription_status: &str) -> AuthResponse {
    AuthResponse {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        user: user(subscription_status),
    }
}

fn credentials() -> Credentials {
    Credentials {
        username: "alice".to_owned(),
        password: "secret123".to_owned(),
    }
}

/// Scripted auth backend: every call returns a clone of its configured
/// outcome and bumps a counter.
#[derive(Default)]
struct StubAuthApi {
    profile: Option<Result<User, ApiError>>,
    auth: Option<Result<AuthResponse, ApiError>>,
    profile_calls: Cell<usize>,
}

impl AuthApi for StubAuthApi {
    async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone().expect("unexpected profile fetch")
    }

    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.auth.clone().expect("unexpected login call")
    }

    async fn register(&self, _form: &RegistrationForm) -> Result<AuthResponse, ApiError> {
        self.auth.clone().expect("unexpected register call")
    }
}

fn manager_with_store() -> (RefCell<SessionManager<MemoryTokenStore>>, MemoryTokenStore) {
    let store = MemoryTokenStore::new();
    (RefCell::new(SessionManager::new(store.clone())), store)
}

fn stored_pair() -> TokenPair {
    TokenPair {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
    }
}

// =============================================================
// Startup check
// =============================================================

#[test]
fn fresh_start_without_tokens_resolves_anonymous_without_network() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi::default();

    block_on(initialize(&manager, &api));

    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert_eq!(api.profile_calls.get(), 0);
    assert_eq!(store.load(), None);
}

#[test]
fn stored_tokens_with_profile_resolve_authenticated() {
    let (manager, store) = manager_with_store();
    store.save(&stored_pair());
    let api = StubAuthApi {
        profile: Some(Ok(user("free"))),
        ..StubAuthApi::default()
    };

    block_on(initialize(&manager, &api));

    let manager = manager.borrow();
    assert_eq!(manager.state().phase, SessionPhase::Authenticated);
    assert_eq!(manager.state().user, Some(user("free")));
    assert_eq!(store.load(), Some(stored_pair()));
}

#[test]
fn stored_tokens_with_rejected_fetch_resolve_anonymous_and_clear() {
    let (manager, store) = manager_with_store();
    store.save(&stored_pair());
    let api = StubAuthApi {
        profile: Some(Err(ApiError::Message("Invalid token.".to_owned()))),
        ..StubAuthApi::default()
    };

    block_on(initialize(&manager, &api));

    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert!(manager.borrow().state().user.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn transport_failure_during_check_also_fails_closed() {
    let (manager, store) = manager_with_store();
    store.save(&stored_pair());
    let api = StubAuthApi {
        profile: Some(Err(ApiError::Transport("connection refused".to_owned()))),
        ..StubAuthApi::default()
    };

    block_on(initialize(&manager, &api));

    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert_eq!(store.load(), None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_persists_pair_and_user() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi {
        auth: Some(Ok(auth_response("free"))),
        ..StubAuthApi::default()
    };

    let result = block_on(login(&manager, &api, &credentials()));

    assert_eq!(result, Ok(user("free")));
    let manager = manager.borrow();
    assert_eq!(manager.state().phase, SessionPhase::Authenticated);
    assert!(!manager.state().is_premium());
    assert_eq!(store.load(), Some(stored_pair()));
}

#[test]
fn login_failure_stays_anonymous_with_empty_store() {
    let (manager, store) = manager_with_store();
    manager.borrow_mut().begin_check();
    let api = StubAuthApi {
        auth: Some(Err(ApiError::Message("Login failed".to_owned()))),
        ..StubAuthApi::default()
    };

    let result = block_on(login(&manager, &api, &credentials()));

    assert_eq!(result, Err(ApiError::Message("Login failed".to_owned())));
    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert_eq!(store.load(), None);
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_success_authenticates() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi {
        auth: Some(Ok(auth_response("free"))),
        ..StubAuthApi::default()
    };

    let result = block_on(register(&manager, &api, &RegistrationForm::default()));

    assert_eq!(result, Ok(user("free")));
    assert_eq!(manager.borrow().state().phase, SessionPhase::Authenticated);
    assert_eq!(store.load(), Some(stored_pair()));
}

#[test]
fn register_field_errors_surface_and_stay_anonymous() {
    let (manager, store) = manager_with_store();
    manager.borrow_mut().begin_check();
    let fields = std::collections::BTreeMap::from([(
        "email".to_owned(),
        "already taken".to_owned(),
    )]);
    let api = StubAuthApi {
        auth: Some(Err(ApiError::Fields(fields.clone()))),
        ..StubAuthApi::default()
    };

    let result = block_on(register(&manager, &api, &RegistrationForm::default()));

    assert_eq!(result, Err(ApiError::Fields(fields)));
    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert_eq!(store.load(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_authenticated_session() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi {
        auth: Some(Ok(auth_response("premium"))),
        ..StubAuthApi::default()
    };
    block_on(login(&manager, &api, &credentials())).expect("login succeeds");

    manager.borrow_mut().logout();

    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert!(manager.borrow().state().user.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn logout_when_already_anonymous_is_idempotent() {
    let (manager, store) = manager_with_store();
    manager.borrow_mut().logout();
    let before = manager.borrow().state().clone();

    manager.borrow_mut().logout();

    assert_eq!(manager.borrow().state(), &before);
    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert_eq!(store.load(), None);
}

// =============================================================
// Profile refresh
// =============================================================

#[test]
fn refresh_replaces_user_wholesale() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi {
        auth: Some(Ok(auth_response("free"))),
        profile: Some(Ok(user("premium"))),
        ..StubAuthApi::default()
    };
    block_on(login(&manager, &api, &credentials())).expect("login succeeds");
    assert!(!manager.borrow().state().is_premium());

    let result = block_on(refresh_profile(&manager, &api));

    assert_eq!(result, Ok(user("premium")));
    assert!(manager.borrow().state().is_premium());
    assert_eq!(manager.borrow().state().phase, SessionPhase::Authenticated);
    assert_eq!(store.load(), Some(stored_pair()));
}

#[test]
fn refresh_failure_demotes_to_anonymous_and_clears_tokens() {
    let (manager, store) = manager_with_store();
    let api = StubAuthApi {
        auth: Some(Ok(auth_response("free"))),
        profile: Some(Err(ApiError::Message("Invalid token.".to_owned()))),
        ..StubAuthApi::default()
    };
    block_on(login(&manager, &api, &credentials())).expect("login succeeds");

    let result = block_on(refresh_profile(&manager, &api));

    assert!(result.is_err());
    assert_eq!(manager.borrow().state().phase, SessionPhase::Anonymous);
    assert!(manager.borrow().state().user.is_none());
    assert_eq!(store.load(), None);
}
