//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Outbound FRED request, including body parsing
    UpstreamFetch,
    /// Inbound request handling end to end
    Request,
}

/// Outcome of an inbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Unavailable,
}

impl RequestOutcome {
    fn as_str(self) -> &'static str {
        match self {
            RequestOutcome::Success => "success",
            RequestOutcome::Unavailable => "unavailable",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::UpstreamFetch => "cpi_feed_upstream_latency_ms",
        LatencyMetric::Request => "cpi_feed_request_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Count an inbound request by outcome
pub fn record_request(outcome: RequestOutcome) {
    metrics::counter!("cpi_feed_requests_total", "outcome" => outcome.as_str()).increment(1);
}

/// Count a failed upstream fetch by failure reason
pub fn record_upstream_failure(reason: &'static str) {
    metrics::counter!("cpi_feed_upstream_failures_total", "reason" => reason).increment(1);
}

/// Install the Prometheus exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}
