//! Shared types for the store panel
//!
//! Wire models and error codes used by both the transport crate and the
//! screen layer.

pub mod error;
pub mod models;

// Re-exports
pub use error::ErrorCode;
pub use models::{DeliveryAddress, FulfillmentType, Order, OrderItem, OrderStatus, StoreStats};
