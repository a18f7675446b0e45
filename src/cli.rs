use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "costcalc", version, about = "Data platform cost estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "costcalc.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate the cost of one platform
    Estimate {
        /// Print the breakdown as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        platform: EstimateCommands,
    },

    /// Compare Fivetran, Rivery and Airbyte on the same inputs
    Compare {
        /// Initial data load (GB)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        initial_gb: f64,

        /// Daily incremental data (MB)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        daily_mb: f64,

        /// Monthly active rows (millions)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mar: f64,

        /// Projected growth (%)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        growth: f64,

        /// Fivetran tier (defaults to the first offered tier)
        #[arg(long)]
        tier: Option<String>,

        /// Print the breakdowns as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the pricing tables offered by the current profile
    Catalog,

    /// Start the HTTP estimate service
    Serve {
        /// Override the configured listen host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum EstimateCommands {
    /// Fivetran: tiered base cost plus MAR above the included 10M
    Fivetran {
        /// Monthly active rows (millions)
        #[arg(long, allow_negative_numbers = true)]
        mar: f64,

        /// Projected growth (%)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        growth: f64,

        /// Pricing tier
        #[arg(long)]
        tier: String,
    },

    /// Rivery: fixed subscription, optionally with extra RPU credits
    Rivery {
        /// Extra RPU credits per month
        #[arg(long, allow_negative_numbers = true)]
        extra_rpu: Option<f64>,
    },

    /// Airbyte credit framing: incremental data and monthly active rows
    Airbyte {
        /// Daily incremental data (MB)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        daily_mb: f64,

        /// Monthly active rows (millions)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mar: f64,

        /// Initial data load (GB), charged once
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        initial_gb: f64,
    },

    /// Airbyte volume framing: rows processed and data volume
    AirbyteVolume {
        /// Rows processed (millions)
        #[arg(long, allow_negative_numbers = true)]
        rows: f64,

        /// Data volume (GB)
        #[arg(long, allow_negative_numbers = true)]
        volume_gb: f64,
    },

    /// Snowflake: warehouse credits by uptime, plus optional storage
    #[command(group(
        ArgGroup::new("uptime")
            .required(true)
            .args(["hours", "weekday_hours"])
    ))]
    Snowflake {
        /// Warehouse size (XS, S, M, L, XL, 2XL ... 6XL)
        #[arg(long)]
        warehouse: String,

        /// Cloud region
        #[arg(long)]
        region: String,

        /// Total usage hours
        #[arg(
            long,
            allow_negative_numbers = true,
            conflicts_with_all = ["weekday_hours", "weekend_hours"]
        )]
        hours: Option<f64>,

        /// Uptime hours per weekday
        #[arg(long, requires = "weekend_hours", allow_negative_numbers = true)]
        weekday_hours: Option<f64>,

        /// Uptime hours per weekend day
        #[arg(long, requires = "weekday_hours", allow_negative_numbers = true)]
        weekend_hours: Option<f64>,

        /// Service edition, enables storage pricing
        #[arg(long, requires = "storage_tb")]
        edition: Option<String>,

        /// Stored data (TB)
        #[arg(long, requires = "edition", allow_negative_numbers = true)]
        storage_tb: Option<f64>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}
