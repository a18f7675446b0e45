use anyhow::Result;
use colored::Colorize;
use costcalc::{
    config::{self, Config},
    server,
};
use std::path::PathBuf;
use tracing::info;

/// Execute the serve command
pub async fn execute(
    cfg: Config,
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let cfg = apply_overrides(cfg, host, port)?;

    println!(
        "{}",
        format!(
            "Starting cost estimator on {}:{}...",
            cfg.server.host, cfg.server.port
        )
        .green()
    );
    info!("Starting cost estimator in foreground mode");

    // Blocks until shutdown
    server::start_server(cfg, config_path).await?;

    Ok(())
}

/// Apply command-line host/port over the configured values and re-validate
fn apply_overrides(mut cfg: Config, host: Option<String>, port: Option<u16>) -> Result<Config> {
    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }
    config::validate_config(&cfg)?;
    Ok(cfg)
}
