use super::*;

use crate::net::types::User;
use crate::util::storage::MemoryStorage;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restored_from_empty_storage_is_signed_out() {
    let storage = MemoryStorage::default();
    let state = SessionState::restored(&storage);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
}

#[test]
fn restored_with_token_only_is_authenticated_without_user() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc123");
    let state = SessionState::restored(&storage);
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.is_authenticated);
    assert!(state.user.is_none());
    assert!(!state.is_loading);
}

#[test]
fn restored_with_corrupt_user_record_is_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc123");
    storage.set(USER_KEY, "{not json");
    let state = SessionState::restored(&storage);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
}

#[test]
fn login_then_restore_roundtrips_through_storage() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.apply_login(&storage, "abc123", Some(&user()));

    let restored = SessionState::restored(&storage);
    assert_eq!(restored.token.as_deref(), Some("abc123"));
    assert!(restored.is_authenticated);
    assert_eq!(restored.user.map(|u| u.name), Some("Alice".to_owned()));
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_authenticated_state() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.apply_login(&storage, "abc123", Some(&user()));
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.is_authenticated);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn login_without_user_clears_stale_user_record() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, "{\"stale\":true}");
    let mut state = SessionState::default();
    state.apply_login(&storage, "abc123", None);
    assert_eq!(storage.get(USER_KEY), None);
    assert!(state.user.is_none());
    assert!(state.is_authenticated);
}

#[test]
fn logout_clears_state_and_storage() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.apply_login(&storage, "abc123", Some(&user()));

    state.apply_logout(&storage);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn logout_from_signed_out_state_is_a_no_op() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::restored(&storage);
    state.apply_logout(&storage);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
}
