//! Store statistics model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics snapshot for one store over a trailing period
///
/// Replaced wholesale on every fetch; never merged with a previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreStats {
    /// Orders placed inside the queried trailing period
    pub orders_in_period: i64,
    /// Orders placed in the current business day
    pub orders_today: i64,
    /// Instant of the most recent order, absent when the store has none
    pub last_order_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_last_order() {
        let json = r#"{"orders_in_period": 12, "orders_today": 2, "last_order_at": null}"#;
        let stats: StoreStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.orders_in_period, 12);
        assert_eq!(stats.orders_today, 2);
        assert!(stats.last_order_at.is_none());
    }

    #[test]
    fn test_deserialize_with_last_order() {
        let json =
            r#"{"orders_in_period": 3, "orders_today": 0, "last_order_at": "2024-05-09T22:14:00Z"}"#;
        let stats: StoreStats = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats.last_order_at.unwrap().to_rfc3339(),
            "2024-05-09T22:14:00+00:00"
        );
    }
}
