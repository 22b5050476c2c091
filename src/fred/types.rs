//! FRED types

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// One point of a time series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Observation date as the provider sent it
    pub date: String,
    /// Observed value
    pub value: Decimal,
}

impl Observation {
    pub fn new(date: impl Into<String>, value: Decimal) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Reasons a series could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured; nothing was sent
    #[error("FRED API key is not configured")]
    MissingApiKey,
    /// Connection, read or timeout failure
    #[error("FRED request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream answered with a non-success status
    #[error("FRED API error: {status} - {body}")]
    Status { status: StatusCode, body: String },
    /// Body did not have the expected shape
    #[error("Malformed FRED response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Stable label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            FetchError::MissingApiKey => "missing_api_key",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Malformed(_) => "malformed",
        }
    }
}

/// Raw observations response
#[derive(Debug, Deserialize)]
pub(crate) struct ObservationsResponse {
    pub observations: Vec<RawObservation>,
}

/// Observation as FRED sends it; values are decimal text
#[derive(Debug, Deserialize)]
pub(crate) struct RawObservation {
    pub date: String,
    pub value: String,
}
