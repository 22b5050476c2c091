//! Fetch command implementation

use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl FetchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let adapter = super::build_adapter(config)?;
        let records = vec![adapter.fetch_market().await?];

        let output = if self.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        println!("{output}");

        Ok(())
    }
}
