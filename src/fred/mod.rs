//! FRED observation source
//!
//! Fetches a single economic time series from the St. Louis Fed's
//! FRED API and hands it back in provider order (oldest first).

mod client;
mod types;

pub use client::{FredClient, FredConfig, CPI_SERIES_ID, FRED_API_URL};
pub use types::{FetchError, Observation};

use async_trait::async_trait;

/// Trait for observation source implementations
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Fetch every observation of the series, oldest first
    async fn fetch_observations(&self) -> Result<Vec<Observation>, FetchError>;
}
