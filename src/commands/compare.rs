use anyhow::Result;
use colored::Colorize;
use costcalc::config::Config;
use costcalc::format;
use costcalc::pricing::{ComparisonInput, Estimator};
use tracing::info;

use super::estimate::print_breakdown;

/// Execute the compare command
pub fn execute(cfg: &Config, input: &ComparisonInput, json: bool) -> Result<()> {
    let results = Estimator::new(cfg.profile.clone()).compare(input)?;
    info!(platforms = results.len(), "Comparison completed");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", "Platform Comparison (cheapest first)".bold());
    for (idx, breakdown) in results.iter().enumerate() {
        println!(
            "  {}. {} ({}): {} / month",
            idx + 1,
            breakdown.platform().to_string().cyan(),
            breakdown.label(),
            format::currency(breakdown.monthly_cost())
        );
    }

    for breakdown in &results {
        println!();
        print_breakdown(breakdown);
    }

    Ok(())
}
