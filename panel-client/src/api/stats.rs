//! Store statistics API

use std::sync::Arc;

use urlencoding::encode;

use crate::http::HttpClient;
use crate::{ClientResult, NetworkHttpClient};
use shared::models::StoreStats;

/// Statistics over a trailing period for one store
pub struct StatsApi<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C: HttpClient> StatsApi<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// GET /api/stores/{id}/statistics?days={days}
    pub async fn store_stats(&self, store_id: &str, days: u32) -> ClientResult<StoreStats> {
        self.http.get(&stats_path(store_id, days)).await
    }
}

fn stats_path(store_id: &str, days: u32) -> String {
    format!("/api/stores/{}/statistics?days={}", encode(store_id), days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::StubHttp;
    use serde_json::json;

    #[test]
    fn test_stats_path_encodes_store_id() {
        assert_eq!(
            stats_path("store-42", 7),
            "/api/stores/store-42/statistics?days=7"
        );
        assert_eq!(
            stats_path("loja central", 15),
            "/api/stores/loja%20central/statistics?days=15"
        );
    }

    #[tokio::test]
    async fn test_store_stats_deserializes_payload() {
        let stub = Arc::new(StubHttp::new(json!({
            "orders_in_period": 12,
            "orders_today": 2,
            "last_order_at": null
        })));
        let api = StatsApi::new(stub.clone());

        let stats = api.store_stats("store-42", 7).await.unwrap();
        assert_eq!(stats.orders_in_period, 12);
        assert_eq!(stats.orders_today, 2);
        assert!(stats.last_order_at.is_none());
        assert_eq!(
            stub.gets(),
            vec!["/api/stores/store-42/statistics?days=7".to_string()]
        );
    }
}
