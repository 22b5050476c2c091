//! CLI interface for cpi-feed
//!
//! Provides subcommands for:
//! - `serve`: Run the HTTP server
//! - `fetch`: Build the market card once and print it
//! - `config`: Show the effective configuration

mod fetch;
mod serve;

pub use fetch::FetchArgs;
pub use serve::ServeArgs;

use crate::config::Config;
use crate::fred::{FredClient, FredConfig};
use crate::market::MarketDataAdapter;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cpi-feed")]
#[command(about = "Serve U.S. CPI market data from the FRED API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Fetch once and print the JSON response body
    Fetch(FetchArgs),
    /// Show configuration
    Config,
}

/// Build the FRED-backed adapter from configuration
pub(crate) fn build_adapter(config: &Config) -> anyhow::Result<MarketDataAdapter> {
    let client = FredClient::with_config(FredConfig::from(&config.provider))?;
    if !client.has_api_key() {
        tracing::warn!(
            "{} is not set; market data requests will fail",
            crate::config::API_KEY_ENV
        );
    }
    Ok(MarketDataAdapter::new(Arc::new(client)))
}
