//! Market card module
//!
//! Turns a newest-first observation list into the `MarketRecord` the
//! front-end renders, and runs the fetch-and-transform pipeline.

mod adapter;
mod record;
mod transform;

pub use adapter::MarketDataAdapter;
pub use record::{MarketRecord, MarketTemplate, MockMetrics, FRED_CPI};
pub use transform::{chart_series, latest_price, percent_change, CHART_POINTS};
