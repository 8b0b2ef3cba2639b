//! Attribute resource service: typed CRUD over the HTTP adapter.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{
    Attribute, AttributeFilters, CreateAttributePayload, Page, UpdateAttributePayload,
};

/// `GET /attributes` with the given filters.
pub async fn list(
    api: &ApiClient,
    filters: &AttributeFilters,
) -> Result<Page<Attribute>, ApiError> {
    api.get_json("/attributes", &filters.to_query()).await
}

/// `GET /attributes/{id}`.
pub async fn get(api: &ApiClient, id: &str) -> Result<Attribute, ApiError> {
    api.get_json(&format!("/attributes/{id}"), &[]).await
}

/// `POST /attributes`.
pub async fn create(
    api: &ApiClient,
    payload: &CreateAttributePayload,
) -> Result<Attribute, ApiError> {
    api.post_json("/attributes", payload).await
}

/// `PUT /attributes/{id}`.
pub async fn update(
    api: &ApiClient,
    payload: &UpdateAttributePayload,
) -> Result<Attribute, ApiError> {
    api.put_json(&format!("/attributes/{}", payload.id), payload)
        .await
}

/// `DELETE /attributes/{id}`.
pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/attributes/{id}")).await
}
