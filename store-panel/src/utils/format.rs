//! Display formatting (business timezone, pt-BR currency)

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use shared::models::StoreStats;

/// Shown in place of the last-order timestamp when the store has no orders
pub const MSG_NO_ORDERS: &str = "Sem pedidos";

/// Rendered strings for the three statistics tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub orders_in_period: String,
    pub orders_today: String,
    pub last_order: String,
}

/// Locale formatter for the panel screens
///
/// Instants come off the wire in UTC; everything user-facing is rendered in
/// the store's business timezone.
#[derive(Debug, Clone)]
pub struct Formatter {
    tz: Tz,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(chrono_tz::America::Sao_Paulo)
    }
}

impl Formatter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// `dd/MM/yyyy HH:mm` in the business timezone
    pub fn date_time(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.tz)
            .format("%d/%m/%Y %H:%M")
            .to_string()
    }

    /// pt-BR currency: `R$ 1.234,56`
    pub fn currency(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as i64;
        let whole = group_thousands(cents / 100);
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}R$ {},{:02}", sign, whole, cents % 100)
    }

    pub fn last_order(&self, instant: Option<DateTime<Utc>>) -> String {
        match instant {
            Some(instant) => self.date_time(instant),
            None => MSG_NO_ORDERS.to_string(),
        }
    }

    pub fn stats_display(&self, stats: &StoreStats) -> StatsDisplay {
        StatsDisplay {
            orders_in_period: stats.orders_in_period.to_string(),
            orders_today: stats.orders_today.to_string(),
            last_order: self.last_order(stats.last_order_at),
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn formatter() -> Formatter {
        Formatter::default()
    }

    #[test]
    fn test_currency_plain_and_grouped() {
        let f = formatter();
        assert_eq!(f.currency(0.0), "R$ 0,00");
        assert_eq!(f.currency(12.5), "R$ 12,50");
        assert_eq!(f.currency(1234.5), "R$ 1.234,50");
        assert_eq!(f.currency(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(formatter().currency(-42.0), "-R$ 42,00");
    }

    #[test]
    fn test_date_time_renders_in_business_timezone() {
        // 18:30 UTC is 15:30 in São Paulo (UTC-3, no DST since 2019)
        let instant = Utc.with_ymd_and_hms(2024, 5, 10, 18, 30, 0).unwrap();
        assert_eq!(formatter().date_time(instant), "10/05/2024 15:30");
    }

    #[test]
    fn test_last_order_fallback() {
        assert_eq!(formatter().last_order(None), MSG_NO_ORDERS);
    }

    #[test]
    fn test_stats_display() {
        let stats = StoreStats {
            orders_in_period: 12,
            orders_today: 2,
            last_order_at: None,
        };
        let display = formatter().stats_display(&stats);
        assert_eq!(display.orders_in_period, "12");
        assert_eq!(display.orders_today, "2");
        assert_eq!(display.last_order, "Sem pedidos");
    }
}
