//! Fetch-and-transform pipeline

use super::{MarketRecord, MarketTemplate, FRED_CPI};
use crate::fred::{FetchError, ObservationSource};
use crate::telemetry::{record_latency, record_upstream_failure, LatencyMetric};
use std::sync::Arc;
use std::time::Instant;

/// Produces one market card per call from a single observation source
#[derive(Clone)]
pub struct MarketDataAdapter {
    source: Arc<dyn ObservationSource>,
    template: MarketTemplate,
}

impl MarketDataAdapter {
    /// Create an adapter serving the FRED CPI card
    pub fn new(source: Arc<dyn ObservationSource>) -> Self {
        Self::with_template(source, FRED_CPI)
    }

    /// Create an adapter with a custom card template
    pub fn with_template(source: Arc<dyn ObservationSource>, template: MarketTemplate) -> Self {
        Self { source, template }
    }

    /// Fetch the series and build the card
    ///
    /// Every failure is logged here and returned as-is; no partial
    /// record is ever produced.
    pub async fn fetch_market(&self) -> Result<MarketRecord, FetchError> {
        let started = Instant::now();
        let result = self.source.fetch_observations().await;
        record_latency(LatencyMetric::UpstreamFetch, started.elapsed());

        let mut observations = match result {
            Ok(observations) => observations,
            Err(e) => {
                tracing::warn!(
                    market = self.template.id,
                    reason = e.reason(),
                    error = %e,
                    "Failed to fetch market data"
                );
                record_upstream_failure(e.reason());
                return Err(e);
            }
        };

        observations.reverse();
        let record = self.template.build(&observations);

        tracing::debug!(
            market = self.template.id,
            observations = observations.len(),
            price = record.price,
            change = record.change_24h,
            "Built market record"
        );

        Ok(record)
    }
}
