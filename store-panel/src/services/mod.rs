//! Service ports the screens talk to
//!
//! The screens only see these traits; the HTTP-backed implementations live
//! in [`http`] and test doubles implement them directly.

pub mod http;

use async_trait::async_trait;

use panel_client::ClientResult;
use shared::models::{Order, StoreStats};

/// Read side of the statistics screen
#[async_trait]
pub trait StatsService: Send + Sync {
    async fn store_stats(&self, store_id: &str, days: u32) -> ClientResult<StoreStats>;
}

/// Read and reprint operations of the order screen
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn get_order(&self, order_id: &str) -> ClientResult<Order>;

    /// Fire-and-forget reprint; the flag is the server's confirmation
    async fn reprint_order(&self, order_id: &str) -> ClientResult<bool>;
}
