//! HTTP-backed service implementations

use std::sync::Arc;

use async_trait::async_trait;

use panel_client::{ClientResult, NetworkHttpClient, OrdersApi, StatsApi};
use shared::models::{Order, StoreStats};

use super::{OrderService, StatsService};

/// Statistics service over the store API
pub struct HttpStatsService {
    api: StatsApi,
}

impl HttpStatsService {
    pub fn new(http: Arc<NetworkHttpClient>) -> Self {
        Self {
            api: StatsApi::new(http),
        }
    }
}

#[async_trait]
impl StatsService for HttpStatsService {
    async fn store_stats(&self, store_id: &str, days: u32) -> ClientResult<StoreStats> {
        self.api.store_stats(store_id, days).await
    }
}

/// Order service over the store API
pub struct HttpOrderService {
    api: OrdersApi,
}

impl HttpOrderService {
    pub fn new(http: Arc<NetworkHttpClient>) -> Self {
        Self {
            api: OrdersApi::new(http),
        }
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    async fn get_order(&self, order_id: &str) -> ClientResult<Order> {
        self.api.get(order_id).await
    }

    async fn reprint_order(&self, order_id: &str) -> ClientResult<bool> {
        self.api.reprint(order_id).await
    }
}
