//! OrderEase backend service
//!
//! HTTP CRUD API for the restaurant-ordering application: products,
//! waiters, orders, dining tables and the singleton settings document,
//! persisted in DynamoDB, with image uploads proxied to an external
//! image-hosting API.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Handler modules
pub mod handlers;

/// External image-host client
pub mod image_host;

/// Server startup
pub mod server;

/// Application state
pub mod state;

/// Environment, errors and extractors
pub mod types;
