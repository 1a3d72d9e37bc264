//! Store panel screen logic
//!
//! Controllers for the two store-management screens: the statistics viewer
//! (orders over a configurable trailing period) and the order detail viewer
//! with its reprint action. Both are thin interaction layers over the
//! remote store API; rendering is left to the embedding frontend.

pub mod app;
pub mod config;
pub mod logger;
pub mod period;
pub mod screens;
pub mod services;
pub mod utils;

pub use app::Panel;
pub use config::PanelConfig;
pub use period::ReportingPeriod;
pub use screens::{FetchState, OrderScreen, OrderView, Route, StatsScreen};
pub use services::{OrderService, StatsService};
pub use utils::format::Formatter;
