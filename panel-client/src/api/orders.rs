//! Orders API

use std::sync::Arc;

use urlencoding::encode;

use crate::http::HttpClient;
use crate::{ClientResult, NetworkHttpClient};
use shared::models::Order;

/// Single-order queries and the reprint action
pub struct OrdersApi<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C: HttpClient> OrdersApi<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// GET /api/orders/{id}
    pub async fn get(&self, order_id: &str) -> ClientResult<Order> {
        self.http.get(&order_path(order_id)).await
    }

    /// POST /api/orders/{id}/reprint
    ///
    /// Returns the server's confirmation flag; no payload beyond that.
    pub async fn reprint(&self, order_id: &str) -> ClientResult<bool> {
        self.http.post_empty(&reprint_path(order_id)).await
    }
}

fn order_path(order_id: &str) -> String {
    format!("/api/orders/{}", encode(order_id))
}

fn reprint_path(order_id: &str) -> String {
    format!("/api/orders/{}/reprint", encode(order_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::StubHttp;
    use serde_json::json;
    use shared::models::OrderStatus;

    #[test]
    fn test_paths_encode_order_id() {
        assert_eq!(order_path("ord_01"), "/api/orders/ord_01");
        assert_eq!(order_path("ord/01"), "/api/orders/ord%2F01");
        assert_eq!(reprint_path("ord_01"), "/api/orders/ord_01/reprint");
    }

    #[tokio::test]
    async fn test_get_deserializes_order() {
        let stub = Arc::new(StubHttp::new(json!({
            "id": "ord_01",
            "display_id": "0042",
            "status": "PRINTED",
            "created_at": "2024-05-10T18:30:00Z",
            "customer_name": null,
            "customer_phone": null,
            "fulfillment": "PICKUP",
            "address": null,
            "note": null,
            "total": 25.0,
            "items": []
        })));
        let api = OrdersApi::new(stub.clone());

        let order = api.get("ord_01").await.unwrap();
        assert_eq!(order.status, OrderStatus::Printed);
        assert_eq!(stub.gets(), vec!["/api/orders/ord_01".to_string()]);
    }

    #[tokio::test]
    async fn test_reprint_posts_to_reprint_path() {
        let stub = Arc::new(StubHttp::new(json!(true)));
        let api = OrdersApi::new(stub.clone());

        assert!(api.reprint("ord_01").await.unwrap());
        assert_eq!(stub.posts(), vec!["/api/orders/ord_01/reprint".to_string()]);
    }
}
