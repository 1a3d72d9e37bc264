//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as reported by the store API
///
/// The API may grow statuses the panel does not know about; those fold into
/// `Unknown` instead of failing deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Printing,
    Printed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How the order leaves the store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    Delivery,
    Pickup,
}

/// Delivery address (present only for DELIVERY orders)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryAddress {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub reference: Option<String>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub price: f64,
    pub note: Option<String>,
}

/// Order entity as consumed by the order screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Short human-facing identifier shown in the header
    pub display_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub fulfillment: FulfillmentType,
    /// Only meaningful when `fulfillment` is `Delivery`
    pub address: Option<DeliveryAddress>,
    pub note: Option<String>,
    /// Total amount in currency unit
    pub total: f64,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_delivery_order() {
        let json = r#"{
            "id": "ord_01",
            "display_id": "0042",
            "status": "NEW",
            "created_at": "2024-05-10T18:30:00Z",
            "customer_name": "Maria",
            "customer_phone": null,
            "fulfillment": "DELIVERY",
            "address": {
                "street": "Rua das Flores",
                "number": "120",
                "complement": "ap 31",
                "neighborhood": "Centro",
                "reference": null
            },
            "note": "sem cebola",
            "total": 59.8,
            "items": [
                {"name": "Pizza grande", "quantity": 1, "price": 49.9, "note": null},
                {"name": "Refrigerante", "quantity": 2, "price": 4.95, "note": "gelado"}
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.fulfillment, FulfillmentType::Delivery);
        assert_eq!(order.address.as_ref().unwrap().street, "Rua das Flores");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].quantity, 2);
    }

    #[test]
    fn test_unknown_status_folds_into_default() {
        let json = r#""DISPATCHED""#;
        let status: OrderStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_status_roundtrip() {
        let json = serde_json::to_string(&OrderStatus::Printing).unwrap();
        assert_eq!(json, r#""PRINTING""#);
        let status: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, OrderStatus::Printing);
    }
}
