#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::StorageBackend;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the cached user record (JSON).
pub const USER_KEY: &str = "user";

/// Authentication state: the single source of truth for whether the
/// current visitor is signed in.
///
/// Invariant: once `is_loading` is false, `is_authenticated` holds
/// exactly when `token` is present.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for SessionState {
    /// The pre-restore shape: nothing known yet, restore pending.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// The settled signed-out shape.
    fn signed_out() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }

    /// Derive state from durable storage.
    ///
    /// A missing token yields the signed-out shape. A token with a
    /// corrupt cached user record also yields the signed-out shape
    /// rather than a half-restored session. Never fails.
    pub fn restored(storage: &dyn StorageBackend) -> Self {
        let Some(token) = storage.get(TOKEN_KEY) else {
            return Self::signed_out();
        };

        let user = match storage.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("discarding corrupt cached user record: {e}");
                    return Self::signed_out();
                }
            },
            None => None,
        };

        Self {
            token: Some(token),
            user,
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// Persist credentials and move to the authenticated shape.
    pub fn apply_login(
        &mut self,
        storage: &dyn StorageBackend,
        token: &str,
        user: Option<&User>,
    ) {
        storage.set(TOKEN_KEY, token);
        match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(json) => storage.set(USER_KEY, &json),
                Err(e) => log::warn!("failed to cache user record: {e}"),
            },
            None => storage.remove(USER_KEY),
        }

        self.token = Some(token.to_owned());
        self.user = user.cloned();
        self.is_authenticated = true;
    }

    /// Clear persisted credentials and move to the signed-out shape.
    pub fn apply_logout(&mut self, storage: &dyn StorageBackend) {
        storage.remove(TOKEN_KEY);
        storage.remove(USER_KEY);
        *self = Self::signed_out();
    }
}

/// Process-wide session store: a reactive wrapper around [`SessionState`]
/// plus its durable storage backing.
///
/// Cloned freely into event handlers; all clones share the same signal
/// and storage.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            storage,
        }
    }

    /// Reactive read access for components.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current token without subscribing to changes. Used by the HTTP
    /// adapter's request interception.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Re-derive state from durable storage. Idempotent; safe to call on
    /// every protected-layout mount.
    pub fn initialize(&self) {
        self.state.set(SessionState::restored(self.storage.as_ref()));
    }

    /// Record a successful authentication.
    pub fn login(&self, token: &str, user: Option<&User>) {
        let storage = Arc::clone(&self.storage);
        self.state
            .update(|s| s.apply_login(storage.as_ref(), token, user));
    }

    /// Sign out and clear durable storage.
    pub fn logout(&self) {
        let storage = Arc::clone(&self.storage);
        self.state.update(|s| s.apply_logout(storage.as_ref()));
    }

    /// Toggle the in-flight-auth-request flag.
    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.is_loading = loading);
    }
}
