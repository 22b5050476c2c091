//! cpi-feed: U.S. CPI market data served from the FRED API
//!
//! This library provides the components for:
//! - Fetching the `CPIAUCSL` series from FRED
//! - Deriving price, percent change and a 12-point chart series
//! - Serving the result as a front-end market card over HTTP
//! - Logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod fred;
pub mod market;
pub mod server;
pub mod telemetry;
