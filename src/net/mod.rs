//! Network layer: the HTTP client adapter, wire types, and the typed
//! service wrappers for each backend resource.

pub mod attributes;
pub mod auth;
pub mod client;
pub mod error;
pub mod products;
pub mod types;
