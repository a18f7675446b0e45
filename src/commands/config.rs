use anyhow::Result;
use colored::Colorize;
use costcalc::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file plus environment overrides)
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    if !path.exists() {
        println!(
            "{}",
            format!("No file at {}, using defaults", path.display()).dimmed()
        );
    }

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!(
        "  {}: {} ({:?})",
        "Logging".cyan(),
        cfg.logging.level,
        cfg.logging.format
    );
    println!(
        "  {}: {}",
        "Fivetran Tiers".cyan(),
        cfg.profile.fivetran_tiers.join(", ")
    );
    println!("  {}: {}", "Airbyte Framings".cyan(), cfg.profile.airbyte_framings.len());
    println!("  {}: {}", "Enabled Options".cyan(), enabled_options(&cfg).join(", "));

    info!("Configuration validation successful");
    Ok(())
}

/// Names of the optional form fields the profile exposes
fn enabled_options(cfg: &Config) -> Vec<&'static str> {
    let mut options = Vec::new();
    if cfg.profile.rivery_extended {
        options.push("rivery extra RPU credits");
    }
    if cfg.profile.snowflake_storage {
        options.push("snowflake storage");
    }
    if options.is_empty() {
        options.push("none");
    }
    options
}
