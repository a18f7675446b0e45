use anyhow::{bail, Result};
use colored::Colorize;
use costcalc::config::Config;
use costcalc::format;
use costcalc::pricing::{
    AirbyteCreditInput, AirbyteVolumeInput, CostBreakdown, EstimateRequest, Estimator,
    FivetranInput, RiveryInput, SnowflakeInput, StorageSelection, Uptime,
};
use tracing::{info, warn};

use crate::cli::EstimateCommands;

/// Execute the estimate command
pub fn execute(cfg: &Config, command: EstimateCommands, json: bool) -> Result<()> {
    let request = build_request(command)?;
    let platform = request.platform();
    let estimator = Estimator::new(cfg.profile.clone());

    let breakdown = estimator.estimate(&request).map_err(|e| {
        warn!(%platform, error = %e, "Estimate rejected");
        e
    })?;
    info!(%platform, monthly_cost = breakdown.monthly_cost(), "Estimate completed");

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print_breakdown(&breakdown);
    }

    Ok(())
}

/// Print one breakdown with a colored header
pub fn print_breakdown(breakdown: &CostBreakdown) {
    println!("{}", "Cost Breakdown".green().bold());
    println!("{}", format::render_breakdown(breakdown));
}

/// Translate command-line arguments into an engine request
pub fn build_request(command: EstimateCommands) -> Result<EstimateRequest> {
    let request = match command {
        EstimateCommands::Fivetran { mar, growth, tier } => {
            EstimateRequest::Fivetran(FivetranInput {
                monthly_active_rows: mar,
                projected_growth: growth,
                tier,
            })
        }
        EstimateCommands::Rivery { extra_rpu } => EstimateRequest::Rivery(RiveryInput {
            extra_rpu_credits: extra_rpu,
        }),
        EstimateCommands::Airbyte {
            daily_mb,
            mar,
            initial_gb,
        } => EstimateRequest::Airbyte(AirbyteCreditInput {
            daily_incremental_data_mb: daily_mb,
            monthly_active_rows: mar,
            initial_data_load_gb: initial_gb,
        }),
        EstimateCommands::AirbyteVolume { rows, volume_gb } => {
            EstimateRequest::AirbyteVolume(AirbyteVolumeInput {
                rows_processed_millions: rows,
                data_volume_gb: volume_gb,
            })
        }
        EstimateCommands::Snowflake {
            warehouse,
            region,
            hours,
            weekday_hours,
            weekend_hours,
            edition,
            storage_tb,
        } => {
            let uptime = match (hours, weekday_hours, weekend_hours) {
                (Some(usage_hours), None, None) => Uptime::Hours { usage_hours },
                (None, Some(weekday_uptime_hours), Some(weekend_uptime_hours)) => Uptime::Weekly {
                    weekday_uptime_hours,
                    weekend_uptime_hours,
                },
                _ => bail!("Snowflake needs --hours, or both --weekday-hours and --weekend-hours"),
            };
            let storage = edition.map(|service_edition| StorageSelection {
                service_edition,
                storage_tb: storage_tb.unwrap_or(0.0),
            });
            EstimateRequest::Snowflake(SnowflakeInput {
                warehouse_size: warehouse,
                region,
                uptime,
                storage,
            })
        }
    };
    Ok(request)
}
