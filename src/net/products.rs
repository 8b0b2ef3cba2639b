//! Product resource service: typed CRUD over the HTTP adapter.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{
    CreateProductPayload, Page, Product, ProductFilters, UpdateProductPayload,
};

/// `GET /products` with the given filters.
pub async fn list(api: &ApiClient, filters: &ProductFilters) -> Result<Page<Product>, ApiError> {
    api.get_json("/products", &filters.to_query()).await
}

/// `GET /products/{id}`.
pub async fn get(api: &ApiClient, id: &str) -> Result<Product, ApiError> {
    api.get_json(&format!("/products/{id}"), &[]).await
}

/// `POST /products`.
pub async fn create(api: &ApiClient, payload: &CreateProductPayload) -> Result<Product, ApiError> {
    api.post_json("/products", payload).await
}

/// `PUT /products/{id}`.
pub async fn update(api: &ApiClient, payload: &UpdateProductPayload) -> Result<Product, ApiError> {
    api.put_json(&format!("/products/{}", payload.id), payload)
        .await
}

/// `DELETE /products/{id}`.
pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/products/{id}")).await
}
