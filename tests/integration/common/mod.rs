//! Shared test fixtures: a local stand-in for the FRED API and an app
//! instance pointed at it.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use cpi_feed::fred::{FredClient, FredConfig};
use cpi_feed::market::MarketDataAdapter;
use cpi_feed::server::{self, AppState};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";

pub const TWO_MONTHS: &str = r#"{"observations":[{"date":"2024-01-01","value":"300.0"},{"date":"2024-02-01","value":"303.0"}]}"#;

/// Canned upstream behaviour
#[derive(Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

/// Running mock of the FRED observations endpoint
pub struct MockFred {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl MockFred {
    pub async fn start(response: MockResponse) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));
        let state = MockState {
            response,
            hits: hits.clone(),
            last_query: last_query.clone(),
        };

        let app = Router::new()
            .route("/fred/series/observations", get(observations))
            .with_state(state);

        let addr = spawn_router(app).await;
        Self {
            base_url: format!("http://{addr}"),
            hits,
            last_query,
        }
    }

    /// Number of requests received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Query string of the most recent request
    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.last_query.lock().unwrap().clone()
    }
}

async fn observations(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = Some(query);

    if !state.response.delay.is_zero() {
        tokio::time::sleep(state.response.delay).await;
    }

    (
        state.response.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
}

async fn spawn_router(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// FRED client config aimed at `base_url`
pub fn fred_config(base_url: &str, api_key: Option<&str>) -> FredConfig {
    FredConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
        api_key: api_key.map(str::to_string),
        ..FredConfig::default()
    }
}

/// Start the service against `base_url`; returns its root URL
pub async fn start_app(base_url: &str, api_key: Option<&str>) -> String {
    start_app_with(fred_config(base_url, api_key)).await
}

pub async fn start_app_with(config: FredConfig) -> String {
    let client = FredClient::with_config(config).unwrap();
    let state = AppState::new(MarketDataAdapter::new(Arc::new(client)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, state, std::future::pending()));

    format!("http://{addr}")
}

/// A port nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Observations body for consecutive days of January 2024, value = day
pub fn daily_observations(days: u32) -> String {
    let observations: Vec<serde_json::Value> = (1..=days)
        .map(|d| {
            serde_json::json!({
                "date": format!("2024-01-{d:02}"),
                "value": format!("{d}.0"),
            })
        })
        .collect();
    serde_json::json!({ "observations": observations }).to_string()
}
