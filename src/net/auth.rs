//! Authentication calls and their session-store orchestration.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginPayload, SignupPayload};
use crate::state::session::SessionStore;

/// `POST /auth/login`.
pub async fn login(api: &ApiClient, payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
    api.post_json("/auth/login", payload).await
}

/// `POST /auth/signup`.
pub async fn signup(api: &ApiClient, payload: &SignupPayload) -> Result<AuthResponse, ApiError> {
    api.post_json("/auth/signup", payload).await
}

/// Run the login call with loading-flag bookkeeping: the flag is raised
/// for the duration of the request and cleared on every exit path. On
/// success the session store takes the returned credentials; errors
/// propagate to the caller for form display.
pub async fn handle_login(
    api: &ApiClient,
    session: &SessionStore,
    payload: &LoginPayload,
) -> Result<AuthResponse, ApiError> {
    session.set_loading(true);
    let result = login(api, payload).await;
    settle(session, result)
}

/// Signup twin of [`handle_login`].
pub async fn handle_signup(
    api: &ApiClient,
    session: &SessionStore,
    payload: &SignupPayload,
) -> Result<AuthResponse, ApiError> {
    session.set_loading(true);
    let result = signup(api, payload).await;
    settle(session, result)
}

/// Shared tail: feed a success into the store, clear loading in all
/// cases.
fn settle(
    session: &SessionStore,
    result: Result<AuthResponse, ApiError>,
) -> Result<AuthResponse, ApiError> {
    if let Ok(response) = &result {
        session.login(&response.token, Some(&response.user));
    }
    session.set_loading(false);
    result
}
