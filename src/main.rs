use clap::Parser;
use cpi_feed::cli::{Cli, Commands};
use cpi_feed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)
        .or_else(|e| {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str::<Config>(include_str!("../config.toml.example")).map_err(anyhow::Error::from)
        })?
        .with_env_overrides();

    // Initialize telemetry
    cpi_feed::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting HTTP server");
            args.execute(&config).await?;
        }
        Commands::Fetch(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Server: {}:{}", config.server.bind, config.server.port);
            println!("  Provider: {}", config.provider.base_url);
            println!("  Timeout: {}s", config.provider.timeout_secs);
            println!(
                "  API key: {}",
                if config.provider.api_key.is_some() { "set" } else { "missing" }
            );
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: :{port}"),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
