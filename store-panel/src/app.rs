//! Panel composition root
//!
//! Wires the configuration, the shared HTTP client and the formatter, and
//! hands out one screen controller per mount.

use std::sync::Arc;

use tracing_appender::non_blocking::WorkerGuard;

use panel_client::{ClientConfig, ClientResult, NetworkHttpClient};

use crate::config::PanelConfig;
use crate::logger;
use crate::screens::{OrderScreen, StatsScreen};
use crate::services::http::{HttpOrderService, HttpStatsService};
use crate::utils::format::Formatter;

pub struct Panel {
    config: PanelConfig,
    formatter: Formatter,
    http: Arc<NetworkHttpClient>,
}

impl Panel {
    pub fn new(config: PanelConfig) -> ClientResult<Self> {
        let client_config =
            ClientConfig::new(config.edge_url.clone()).with_timeout(config.timeout_secs);
        let http = Arc::new(NetworkHttpClient::from_config(client_config)?);
        let formatter = Formatter::new(config.timezone);
        Ok(Self {
            config,
            formatter,
            http,
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(PanelConfig::from_env())
    }

    /// Install the tracing pipeline described by the config
    pub fn init_logging(&self) -> anyhow::Result<Option<WorkerGuard>> {
        logger::init(
            &self.config.log_level,
            self.config.log_json,
            self.config.log_dir.as_deref(),
        )
    }

    /// Fresh statistics screen for one mount
    pub fn stats_screen(&self, store_id: Option<String>) -> StatsScreen {
        StatsScreen::new(Arc::new(HttpStatsService::new(self.http.clone())), store_id)
    }

    /// Fresh order screen for one mount
    pub fn order_screen(&self) -> OrderScreen {
        OrderScreen::new(Arc::new(HttpOrderService::new(self.http.clone())))
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_wires_screens_from_config() {
        let panel = Panel::new(PanelConfig::default()).unwrap();
        let _stats = panel.stats_screen(Some("store-42".to_string()));
        let _order = panel.order_screen();
        assert_eq!(panel.formatter().timezone(), chrono_tz::America::Sao_Paulo);
    }
}
