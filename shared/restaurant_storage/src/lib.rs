//! DynamoDB storage services for the OrderEase backend
//!
//! This crate provides one storage client per document collection used by
//! the restaurant-ordering API: products, waiters, orders, dining tables
//! and the singleton settings document.

pub mod dining_table;
pub mod order;
pub mod product;
pub mod settings;
pub mod waiter;

/// Status value that marks a soft-deleted document.
///
/// Products and waiters are never removed from their tables; "deleting"
/// them sets their `status` attribute to this value instead.
pub const STATUS_INACTIVE: &str = "Inativo";
