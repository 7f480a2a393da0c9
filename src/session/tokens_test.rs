use super::*;

fn pair() -> TokenPair {
    TokenPair {
        access: "access-token".to_owned(),
        refresh: "refresh-token".to_owned(),
    }
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn save_then_load_returns_identical_pair() {
    let store = MemoryTokenStore::new();
    store.save(&pair());
    assert_eq!(store.load(), Some(pair()));
}

#[test]
fn load_on_fresh_store_is_absent() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load(), None);
}

#[test]
fn clear_then_load_is_absent() {
    let store = MemoryTokenStore::new();
    store.save(&pair());
    store.clear();
    assert_eq!(store.load(), None);
    assert!(store.is_empty());
}

#[test]
fn save_overwrites_previous_pair() {
    let store = MemoryTokenStore::new();
    store.save(&pair());
    let replacement = TokenPair {
        access: "a2".to_owned(),
        refresh: "r2".to_owned(),
    };
    store.save(&replacement);
    assert_eq!(store.load(), Some(replacement));
}

// =============================================================
// Fail closed on half-present pairs
// =============================================================

#[test]
fn access_only_is_reported_absent_and_wiped() {
    let store = MemoryTokenStore::new();
    store.seed_access_only("orphan");
    assert_eq!(store.load(), None);
    assert!(store.is_empty());
}

#[test]
fn refresh_only_is_reported_absent_and_wiped() {
    let store = MemoryTokenStore::new();
    store.seed_refresh_only("orphan");
    assert_eq!(store.load(), None);
    assert!(store.is_empty());
}

// =============================================================
// Clones share storage
// =============================================================

#[test]
fn clones_observe_the_same_slots() {
    let store = MemoryTokenStore::new();
    let observer = store.clone();
    store.save(&pair());
    assert_eq!(observer.load(), Some(pair()));
}

#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserTokenStore;
    store.save(&pair());
    assert_eq!(store.load(), None);
    store.clear();
}
