//! Panel Client - HTTP client for the store-management API
//!
//! Provides network-based HTTP calls to the store API consumed by the
//! panel screens.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{OrdersApi, StatsApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
