use anyhow::Result;
use colored::Colorize;
use costcalc::config::Config;
use costcalc::format;
use costcalc::pricing::{catalog, Estimator};

/// Execute the catalog command
pub fn execute(cfg: &Config) -> Result<()> {
    let view = Estimator::new(cfg.profile.clone()).catalog();

    println!("{}", "Fivetran Tiers:".cyan());
    for tier in &view.fivetran_tiers {
        println!(
            "    {}: {} base, {} per million MAR above {}M",
            tier.name,
            format::currency(tier.base_cost),
            format::currency(tier.cost_per_unit),
            catalog::FIVETRAN_INCLUDED_MAR
        );
    }
    println!();

    println!("{}", "Rivery:".cyan());
    println!(
        "    Base subscription: {}",
        format::currency(catalog::RIVERY_BASE_MONTHLY)
    );
    if view.rivery_extended {
        println!(
            "    Extra RPU credits: {} per credit",
            format::currency(catalog::RIVERY_COST_PER_RPU)
        );
    }
    println!();

    println!("{}", "Airbyte Framings:".cyan());
    for framing in &view.airbyte_framings {
        println!("    {:?}", framing);
    }
    println!();

    println!("{}", "Snowflake Warehouse Sizes (credits/hour):".cyan());
    for size in &view.snowflake_warehouse_sizes {
        println!("    {}: {}", size.name, size.rate);
    }
    println!("{}", "Snowflake Regions (cost/credit):".cyan());
    for region in &view.snowflake_regions {
        println!("    {}: {}", region.name, format::currency(region.rate));
    }
    if !view.snowflake_editions.is_empty() {
        println!("{}", "Snowflake Editions (storage/TB):".cyan());
        for edition in &view.snowflake_editions {
            println!("    {}: {}", edition.name, format::currency(edition.rate));
        }
    }

    Ok(())
}
