//! Market record types

use super::transform::{chart_series, latest_price, percent_change};
use crate::fred::Observation;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Normalized market card returned to the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub source_name: String,
    pub source_url: String,
    pub release_cadence: String,
    pub region: String,
    pub best_for: String,
    /// Latest observation value
    pub price: f64,
    /// Percent change between the two latest observations
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    pub funding_rate: f64,
    #[serde(rename = "fundingRateAPR")]
    pub funding_rate_apr: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    pub open_interest: f64,
    pub tags: Vec<String>,
    /// Chart points, oldest to newest
    pub series: Vec<f64>,
}

/// Placeholder trading metrics shown until real ones exist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockMetrics {
    pub funding_rate: f64,
    pub funding_rate_apr: f64,
    pub volume_24h: f64,
    pub open_interest: f64,
}

/// Static descriptive half of a market card
#[derive(Debug, Clone, Copy)]
pub struct MarketTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub source_name: &'static str,
    pub source_url: &'static str,
    pub release_cadence: &'static str,
    pub region: &'static str,
    pub best_for: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: MockMetrics,
}

/// U.S. CPI card backed by FRED's `CPIAUCSL`
pub const FRED_CPI: MarketTemplate = MarketTemplate {
    id: "fred-cpi",
    name: "FRED CPI",
    description: "U.S. Consumer Price Index from the St. Louis Fed, a key inflation indicator.",
    source_name: "FRED API",
    source_url: "https://fred.stlouisfed.org/series/CPIAUCSL",
    release_cadence: "Monthly",
    region: "US",
    best_for: "Economic analysis and research.",
    tags: &["Official", "CPI", "US"],
    metrics: MockMetrics {
        funding_rate: 0.01,
        funding_rate_apr: 3.65,
        volume_24h: 1_800_000.0,
        open_interest: 7_500_000.0,
    },
};

impl MarketTemplate {
    /// Build a record from observations ordered newest first
    pub fn build(&self, newest_first: &[Observation]) -> MarketRecord {
        MarketRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            source_name: self.source_name.to_string(),
            source_url: self.source_url.to_string(),
            release_cadence: self.release_cadence.to_string(),
            region: self.region.to_string(),
            best_for: self.best_for.to_string(),
            price: latest_price(newest_first).to_f64().unwrap_or_default(),
            change_24h: percent_change(newest_first).to_f64().unwrap_or_default(),
            funding_rate: self.metrics.funding_rate,
            funding_rate_apr: self.metrics.funding_rate_apr,
            volume_24h: self.metrics.volume_24h,
            open_interest: self.metrics.open_interest,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            series: chart_series(newest_first),
        }
    }
}
