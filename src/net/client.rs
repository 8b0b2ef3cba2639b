//! HTTP client adapter for the catalog backend.
//!
//! DESIGN
//! ======
//! One `ApiClient` is constructed at startup and shared through context.
//! Every request passes two cross-cutting hooks injected at construction:
//! a token source that supplies the bearer header, and an unauthorized
//! hook that runs on any 401 before the error is re-raised to the caller
//! (the app wires it to force-logout + redirect). Keeping both as
//! injected closures keeps this module free of session and router
//! dependencies, so it stays unit-testable without a browser.
//!
//! Real HTTP only exists in the browser; native builds (unit tests) get
//! stub bodies that fail with a network error.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

#[cfg(target_arch = "wasm32")]
use crate::net::error::error_message;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Supplies the current bearer token, if any.
pub type TokenSource = Arc<dyn Fn() -> Option<String> + Send + Sync>;
/// Invoked once per 401 response, before the error propagates.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shared HTTP client carrying the base URL and the cross-cutting
/// request/response behavior.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token_source: TokenSource,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(
        base_url: String,
        token_source: TokenSource,
        on_unauthorized: UnauthorizedHook,
    ) -> Self {
        Self {
            base_url,
            token_source,
            on_unauthorized,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header when a token is available.
    #[cfg(target_arch = "wasm32")]
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match (self.token_source)() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Map a settled response to success or [`ApiError`], running the
    /// unauthorized hook on 401.
    #[cfg(target_arch = "wasm32")]
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        // A 401 on an authenticated request means the session is dead.
        // Token-less requests (login, signup) fall through and surface
        // the backend's own message to the form instead.
        if response.status() == 401 && (self.token_source)().is_some() {
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status,
                message: error_message(&body),
            });
        }
        Ok(response)
    }

    /// `GET` returning a JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            let request = self
                .authorize(Request::get(&self.url(path)))
                .query(query.iter().map(|(k, v)| (*k, v.as_str())));
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.check(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (path, query);
            Err(ApiError::unavailable())
        }
    }

    /// `POST` with a JSON body, returning a JSON body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            let request = self
                .authorize(Request::post(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.check(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// `PUT` with a JSON body, returning a JSON body.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            let request = self
                .authorize(Request::put(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let response = self.check(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// `DELETE`; no response body expected.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            let request = self.authorize(Request::delete(&self.url(path)));
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.check(response).await?;
            Ok(())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }
}
