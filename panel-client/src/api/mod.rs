//! Typed wrappers over the store API endpoints

mod orders;
mod stats;

#[cfg(test)]
mod test_support;

pub use orders::OrdersApi;
pub use stats::StatsApi;
