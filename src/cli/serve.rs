//! Serve command implementation

use crate::config::Config;
use crate::server::{self, AppState};
use clap::Args;
use tokio::net::TcpListener;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bind = self.bind.as_deref().unwrap_or(&config.server.bind);
        let port = self.port.unwrap_or(config.server.port);

        let adapter = super::build_adapter(config)?;
        let listener = TcpListener::bind((bind, port)).await?;

        server::serve(listener, AppState::new(adapter), server::shutdown_signal()).await
    }
}
