//! Screen controllers

pub mod order;
pub mod stats;

pub use order::{OrderScreen, OrderView, OrderViewState};
pub use stats::{StatsScreen, StatsViewState};

/// Result of an asynchronous fetch as the screen sees it
///
/// Exactly one variant holds at any time for a given screen instance;
/// `Loading` is the mount state.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Navigation targets of the panel
///
/// The screens never navigate by themselves; they hand one of these to the
/// embedding frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    OrderList,
    OrderDetail(String),
    StoreStats(String),
}
