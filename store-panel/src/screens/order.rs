//! Order detail screen
//!
//! Shows one order and offers the reprint action. Displayed state always
//! reflects the last confirmed read; a reprint never updates the order
//! optimistically, it reloads after the server confirms.

use std::sync::Arc;

use tokio::sync::RwLock;

use shared::models::Order;

use crate::screens::Route;
use crate::services::OrderService;

/// Fallback shown when the order could not be loaded
pub const MSG_ORDER_NOT_FOUND: &str = "Pedido não encontrado.";
/// Surfaced when the reprint request fails
pub const MSG_REPRINT_FAILED: &str = "Não foi possível reimprimir o pedido.";

/// Order screen state
///
/// `order` is the last confirmed read and survives failed reloads;
/// `reprinting` doubles as the disabled flag for the reprint control.
#[derive(Debug, Clone, Default)]
pub struct OrderViewState {
    pub order: Option<Order>,
    pub error: Option<String>,
    pub reprinting: bool,
}

/// What the frontend should render
#[derive(Debug, Clone, PartialEq)]
pub enum OrderView {
    Loading,
    Detail(Order),
    NotFound { message: String, back: Route },
}

/// Order detail screen controller
#[derive(Clone)]
pub struct OrderScreen {
    service: Arc<dyn OrderService>,
    state: Arc<RwLock<OrderViewState>>,
}

impl OrderScreen {
    pub fn new(service: Arc<dyn OrderService>) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(OrderViewState::default())),
        }
    }

    /// Fetch the order and replace the displayed record on success
    ///
    /// On failure the error is surfaced and a previously loaded order stays
    /// in place; only a screen that never loaded falls back to "not found".
    pub async fn load(&self, order_id: &str) {
        match self.service.get_order(order_id).await {
            Ok(order) => {
                let mut state = self.state.write().await;
                state.order = Some(order);
                state.error = None;
            }
            Err(err) => {
                tracing::warn!(order_id = %order_id, error = %err, "order load failed");
                let mut state = self.state.write().await;
                state.error = Some(MSG_ORDER_NOT_FOUND.to_string());
            }
        }
    }

    /// Reprint the order, then reload it to pick up the new status
    ///
    /// Ignored while a reprint is already pending. On failure the error is
    /// surfaced and no reload happens.
    pub async fn reprint(&self, order_id: &str) {
        {
            let mut state = self.state.write().await;
            if state.reprinting {
                return;
            }
            state.reprinting = true;
        }

        match self.service.reprint_order(order_id).await {
            Ok(_) => {
                tracing::info!(order_id = %order_id, "reprint accepted, reloading order");
                self.load(order_id).await;
            }
            Err(err) => {
                tracing::warn!(order_id = %order_id, error = %err, "reprint failed");
                self.state.write().await.error = Some(MSG_REPRINT_FAILED.to_string());
            }
        }

        self.state.write().await.reprinting = false;
    }

    pub async fn view(&self) -> OrderView {
        let state = self.state.read().await;
        match (&state.order, &state.error) {
            (Some(order), _) => OrderView::Detail(order.clone()),
            (None, Some(message)) => OrderView::NotFound {
                message: message.clone(),
                back: Route::OrderList,
            },
            (None, None) => OrderView::Loading,
        }
    }

    pub async fn snapshot(&self) -> OrderViewState {
        self.state.read().await.clone()
    }
}
