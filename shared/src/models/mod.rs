//! Wire models consumed by the panel screens

mod order;
mod stats;

pub use order::{DeliveryAddress, FulfillmentType, Order, OrderItem, OrderStatus};
pub use stats::StoreStats;
