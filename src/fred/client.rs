//! FRED API client
//!
//! Issues one `series/observations` request per call. Values arrive as
//! decimal text and are parsed locally; FRED's `"."` missing-value marker
//! is skipped rather than treated as an error. Dates are passed through
//! untouched.

use super::types::{ObservationsResponse, RawObservation};
use super::{FetchError, Observation, ObservationSource};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

/// FRED API base URL
pub const FRED_API_URL: &str = "https://api.stlouisfed.org";

/// U.S. CPI for all urban consumers, seasonally adjusted
pub const CPI_SERIES_ID: &str = "CPIAUCSL";

/// Value FRED reports for a period with no observation
const MISSING_VALUE: &str = ".";

/// Configuration for the FRED client
#[derive(Debug, Clone)]
pub struct FredConfig {
    /// Base URL for the FRED API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Series to fetch
    pub series_id: String,
    /// API key; requests are refused locally when absent
    pub api_key: Option<String>,
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            base_url: FRED_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            series_id: CPI_SERIES_ID.to_string(),
            api_key: None,
        }
    }
}

impl From<&crate::config::ProviderConfig> for FredConfig {
    fn from(provider: &crate::config::ProviderConfig) -> Self {
        Self {
            base_url: provider.base_url.clone(),
            timeout: provider.timeout(),
            api_key: provider.api_key.clone(),
            ..Self::default()
        }
    }
}

/// Client for the FRED observations endpoint
pub struct FredClient {
    config: FredConfig,
    client: Client,
}

impl FredClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: FredConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn observations_url(&self) -> String {
        format!(
            "{}/fred/series/observations",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ObservationSource for FredClient {
    async fn fetch_observations(&self) -> Result<Vec<Observation>, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey)?;

        let url = self.observations_url();
        tracing::debug!(url = %url, series_id = %self.config.series_id, "Fetching FRED observations");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", self.config.series_id.as_str()),
                ("api_key", api_key),
                ("file_type", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        let observations = parse_observations(&body)?;

        tracing::debug!(
            series_id = %self.config.series_id,
            count = observations.len(),
            "Parsed FRED observations"
        );

        Ok(observations)
    }
}

/// Parse an observations response body, keeping provider order
pub(crate) fn parse_observations(body: &str) -> Result<Vec<Observation>, FetchError> {
    let response: ObservationsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let mut observations = Vec::with_capacity(response.observations.len());
    for raw in response.observations {
        if let Some(observation) = convert_observation(raw)? {
            observations.push(observation);
        }
    }
    Ok(observations)
}

/// Convert a raw record; `None` for periods FRED marks as missing
fn convert_observation(raw: RawObservation) -> Result<Option<Observation>, FetchError> {
    let value = raw.value.trim();
    if value == MISSING_VALUE {
        tracing::debug!(date = %raw.date, "Skipping missing FRED observation");
        return Ok(None);
    }

    let value = Decimal::from_str(value).map_err(|e| {
        FetchError::Malformed(format!("bad value {:?} on {}: {}", raw.value, raw.date, e))
    })?;

    Ok(Some(Observation::new(raw.date, value)))
}
