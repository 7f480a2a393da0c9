//! Bearer-token persistence over durable browser storage.
//!
//! DESIGN
//! ======
//! The access/refresh pair lives under two fixed localStorage keys and is
//! only ever written or removed together. A half-present pair is treated as
//! absent and cleared on load, so a stale credential cannot outlive a broken
//! write. Token contents are opaque; the backend signs and verifies them.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// An opaque access/refresh credential pair issued by the auth backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Durable storage for the credential pair.
///
/// `save` writes both values inside one synchronous call and `clear` removes
/// both. `load` returns `Some` only when both values are present; an
/// exactly-one-present pair is cleared and reported absent.
pub trait TokenStore {
    fn load(&self) -> Option<TokenPair>;
    fn save(&self, pair: &TokenPair);
    fn clear(&self);
}

/// Token store backed by browser localStorage.
///
/// Outside the browser every operation is inert and `load` reports absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<TokenPair> {
        #[cfg(feature = "browser")]
        {
            let storage = local_storage()?;
            let access = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten();
            let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten();
            match (access, refresh) {
                (Some(access), Some(refresh)) => Some(TokenPair { access, refresh }),
                (None, None) => None,
                _ => {
                    self.clear();
                    None
                }
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            None
        }
    }

    fn save(&self, pair: &TokenPair) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, &pair.access);
                let _ = storage.set_item(REFRESH_TOKEN_KEY, &pair.refresh);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = pair;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "browser")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// In-process token store for unit tests and non-browser builds.
///
/// Clones share the same underlying slots, so a test can hand one clone to a
/// session manager and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slots: Rc<RefCell<(Option<String>, Option<String>)>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<TokenPair> {
        let mut slots = self.slots.borrow_mut();
        match (slots.0.clone(), slots.1.clone()) {
            (Some(access), Some(refresh)) => Some(TokenPair { access, refresh }),
            (None, None) => None,
            _ => {
                *slots = (None, None);
                None
            }
        }
    }

    fn save(&self, pair: &TokenPair) {
        *self.slots.borrow_mut() = (Some(pair.access.clone()), Some(pair.refresh.clone()));
    }

    fn clear(&self) {
        *self.slots.borrow_mut() = (None, None);
    }
}

#[cfg(test)]
impl MemoryTokenStore {
    fn seed_access_only(&self, token: &str) {
        *self.slots.borrow_mut() = (Some(token.to_owned()), None);
    }

    fn seed_refresh_only(&self, token: &str) {
        *self.slots.borrow_mut() = (None, Some(token.to_owned()));
    }

    fn is_empty(&self) -> bool {
        *self.slots.borrow() == (None, None)
    }
}
