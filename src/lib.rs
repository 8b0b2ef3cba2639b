//! # catalog-admin
//!
//! Leptos + WASM admin console for a product catalog: products and their
//! attributes behind username/password authentication, backed by an
//! external REST API.
//!
//! This crate contains pages, components, application state, wire types,
//! and the HTTP client adapter. Pure logic (session transitions, query
//! building, form validation) is kept browser-free so it can be unit
//! tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
