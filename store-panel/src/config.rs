//! Panel configuration
//!
//! Env-driven with defaults; invalid values fall back with a warning
//! instead of failing startup.

use std::env;
use std::str::FromStr;

use chrono_tz::Tz;

/// Runtime configuration for the panel
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the store API
    pub edge_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Business timezone used for display formatting
    pub timezone: Tz,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Directory for daily-rotating file logs; console only when unset
    pub log_dir: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            edge_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            timezone: chrono_tz::America::Sao_Paulo,
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
        }
    }
}

impl PanelConfig {
    /// Load configuration from the environment (and a `.env` file if present)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        Self {
            edge_url: env::var("PANEL_EDGE_URL").unwrap_or(defaults.edge_url),
            timeout_secs: parse_or(
                "PANEL_TIMEOUT_SECS",
                env::var("PANEL_TIMEOUT_SECS").ok(),
                defaults.timeout_secs,
            ),
            timezone: parse_or(
                "PANEL_TIMEZONE",
                env::var("PANEL_TIMEZONE").ok(),
                defaults.timezone,
            ),
            log_level: env::var("PANEL_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_or(
                "PANEL_LOG_JSON",
                env::var("PANEL_LOG_JSON").ok(),
                defaults.log_json,
            ),
            log_dir: env::var("PANEL_LOG_DIR").ok(),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "invalid config value, using default");
            default
        }),
        None => default,
    }
}
