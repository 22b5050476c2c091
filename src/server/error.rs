//! HTTP error responses

use crate::fred::FetchError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Body sent to clients whenever market data is unavailable
pub const UNAVAILABLE_MESSAGE: &str = "Failed to fetch data from FRED.";

/// Errors surfaced by route handlers
#[derive(Debug)]
pub enum ApiError {
    /// Upstream data could not be produced, whatever the cause
    Unavailable(FetchError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "unavailable: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self::Unavailable(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Causes stay in the logs; clients only see the generic message
        let (status, message) = match &self {
            Self::Unavailable(_) => (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE),
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
