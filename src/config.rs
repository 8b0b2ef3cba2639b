//! Compile-time configuration.

/// Default backend endpoint for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Base URL of the catalog REST backend.
///
/// Read from the `API_BASE_URL` environment variable at compile time,
/// falling back to the local development endpoint.
pub fn api_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_owned()
}
