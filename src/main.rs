use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod cli;
mod commands;

use costcalc::config::{self, Config, LogFormat};
use costcalc::init_tracing;
use costcalc::pricing::ComparisonInput;

/// Load configuration and initialize tracing from its logging section
fn load_and_init(path: &Path) -> Result<Config> {
    let cfg = config::load_config(path)?;
    init_tracing(&cfg.logging.level, cfg.logging.format);
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    match args.command {
        cli::Commands::Estimate { json, platform } => {
            let cfg = load_and_init(&args.config)?;
            commands::estimate::execute(&cfg, platform, json)?;
        }
        cli::Commands::Compare {
            initial_gb,
            daily_mb,
            mar,
            growth,
            tier,
            json,
        } => {
            let cfg = load_and_init(&args.config)?;
            let input = ComparisonInput {
                initial_data_load_gb: initial_gb,
                daily_incremental_data_mb: daily_mb,
                monthly_active_rows: mar,
                projected_growth: growth,
                fivetran_tier: tier,
            };
            commands::compare::execute(&cfg, &input, json)?;
        }
        cli::Commands::Catalog => {
            let cfg = load_and_init(&args.config)?;
            commands::catalog::execute(&cfg)?;
        }
        cli::Commands::Serve { host, port } => {
            let cfg = load_and_init(&args.config)?;
            commands::serve::execute(cfg, args.config.clone(), host, port).await?;
        }
        cli::Commands::Config { action } => {
            // The config commands report load errors themselves
            init_tracing("warn", LogFormat::Pretty);
            match action {
                cli::ConfigCommands::Show => commands::config::show(&args.config)?,
                cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
            }
        }
        cli::Commands::Version => {
            println!("costcalc v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
