//! Store statistics screen
//!
//! Resolves the selected reporting period into a day count, validates the
//! inputs and keeps exactly one fetch outcome visible. Responses are applied
//! in completion order filtered by a request generation counter, so a slow
//! stale request can never clobber the state of a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use shared::models::StoreStats;

use crate::period::ReportingPeriod;
use crate::screens::FetchState;
use crate::services::StatsService;

/// Shown when the store identifier is missing
pub const MSG_INVALID_ENTITY: &str = "invalid entity";
/// Shown when the period selection does not resolve to a day count
pub const MSG_INVALID_PERIOD: &str = "invalid period";
/// Shown when the statistics request fails, whatever the cause
pub const MSG_STATS_UNAVAILABLE: &str = "stats unavailable";

/// Inputs and fetch outcome of the statistics screen
#[derive(Debug, Clone)]
pub struct StatsViewState {
    pub store_id: Option<String>,
    pub period: ReportingPeriod,
    pub fetch: FetchState<StoreStats>,
}

/// Statistics screen controller
///
/// One instance per mount. Cloning shares the same state, which is how
/// spawned refreshes observe later input changes.
#[derive(Clone)]
pub struct StatsScreen {
    service: Arc<dyn StatsService>,
    state: Arc<RwLock<StatsViewState>>,
    generation: Arc<AtomicU64>,
    unmounted: CancellationToken,
}

impl StatsScreen {
    pub fn new(service: Arc<dyn StatsService>, store_id: Option<String>) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(StatsViewState {
                store_id,
                period: ReportingPeriod::default(),
                fetch: FetchState::Loading,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            unmounted: CancellationToken::new(),
        }
    }

    /// Validate the current inputs and run one fetch cycle
    ///
    /// Validation failures settle the state without issuing a request. A
    /// completion only lands while its generation is still current and the
    /// screen is still mounted; the transport call itself is never aborted.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (store_id, days) = {
            let mut state = self.state.write().await;
            let Some(store_id) = state.store_id.clone().filter(|id| !id.is_empty()) else {
                state.fetch = FetchState::Error(MSG_INVALID_ENTITY.to_string());
                return;
            };
            let Some(days) = state.period.resolved_days() else {
                state.fetch = FetchState::Error(MSG_INVALID_PERIOD.to_string());
                return;
            };
            state.fetch = FetchState::Loading;
            (store_id, days)
        };

        tracing::debug!(store_id = %store_id, days, "loading store statistics");
        let result = self.service.store_stats(&store_id, days).await;

        let mut state = self.state.write().await;
        if self.unmounted.is_cancelled() || self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(store_id = %store_id, days, "discarding stale statistics response");
            return;
        }
        state.fetch = match result {
            Ok(stats) => FetchState::Loaded(stats),
            Err(err) => {
                tracing::warn!(store_id = %store_id, days, error = %err, "statistics request failed");
                FetchState::Error(MSG_STATS_UNAVAILABLE.to_string())
            }
        };
    }

    /// Switch to another store and restart the fetch cycle
    pub async fn set_store_id(&self, store_id: Option<String>) {
        {
            let mut state = self.state.write().await;
            if state.store_id == store_id {
                return;
            }
            state.store_id = store_id;
        }
        self.refresh().await;
    }

    /// Switch the reporting period and restart the fetch cycle
    ///
    /// Re-selecting the current period is a no-op; use [`refresh`] to force
    /// a reload. Switching back to a previously viewed period re-fetches,
    /// results are never cached.
    ///
    /// [`refresh`]: Self::refresh
    pub async fn set_period(&self, period: ReportingPeriod) {
        {
            let mut state = self.state.write().await;
            if state.period == period {
                return;
            }
            state.period = period;
        }
        self.refresh().await;
    }

    /// Drop the screen; any in-flight completion is discarded on arrival
    pub fn unmount(&self) {
        self.unmounted.cancel();
    }

    pub async fn fetch_state(&self) -> FetchState<StoreStats> {
        self.state.read().await.fetch.clone()
    }

    pub async fn snapshot(&self) -> StatsViewState {
        self.state.read().await.clone()
    }
}
