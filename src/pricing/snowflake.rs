use tracing::debug;

use crate::error::PricingError;
use crate::pricing::catalog::SnowflakeCatalog;
use crate::pricing::models::{CostBreakdown, InitialSetup, LineItem, Platform, SnowflakeInput};
use crate::pricing::validation::{finite_totals, Validate};

pub const COMPUTE_COST: &str = "Compute (warehouse)";
pub const STORAGE_COST: &str = "Storage";

/// Estimate Snowflake warehouse cost, plus storage when an edition is selected
///
/// All selections are resolved before anything is computed, so an unknown
/// key never yields a partial result.
pub fn estimate(
    input: &SnowflakeInput,
    catalog: &SnowflakeCatalog,
) -> Result<CostBreakdown, PricingError> {
    input.validate()?;

    let (size, credits_per_hour) = catalog.warehouse_sizes.lookup(&input.warehouse_size)?;
    let (region, cost_per_credit) = catalog.regions.lookup(&input.region)?;
    let storage = match &input.storage {
        Some(selection) => {
            let (edition, cost_per_tb) = catalog.editions.lookup(&selection.service_edition)?;
            Some((edition, selection.storage_tb * cost_per_tb))
        }
        None => None,
    };

    let total_uptime_hours = input.uptime.total_hours();
    let total_credits = credits_per_hour * total_uptime_hours;
    let dw_cost = total_credits * cost_per_credit;

    let mut line_items = vec![LineItem::new(COMPUTE_COST, dw_cost)];
    let label = match storage {
        Some((edition, storage_cost)) => {
            line_items.push(LineItem::new(STORAGE_COST, storage_cost));
            format!("{} warehouse in {}, {} edition", size, region, edition)
        }
        None => format!("{} warehouse in {}", size, region),
    };

    debug!(
        total_uptime_hours,
        total_credits, dw_cost, "Computed Snowflake estimate"
    );

    let breakdown = CostBreakdown::new(
        Platform::Snowflake,
        label,
        line_items,
        InitialSetup::included("No separate setup charge"),
    )
    .with_detail("total_uptime_hours", total_uptime_hours)
    .with_detail("total_credits", total_credits);

    finite_totals(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::catalog::SNOWFLAKE;
    use crate::pricing::models::{StorageSelection, Uptime};

    fn weekly_input(size: &str, region: &str, weekday: f64, weekend: f64) -> SnowflakeInput {
        SnowflakeInput {
            warehouse_size: size.to_string(),
            region: region.to_string(),
            uptime: Uptime::Weekly {
                weekday_uptime_hours: weekday,
                weekend_uptime_hours: weekend,
            },
            storage: None,
        }
    }

    #[test]
    fn test_weekday_uptime() {
        let breakdown = estimate(&weekly_input("XS", "us-east-1", 8.0, 0.0), &SNOWFLAKE).unwrap();

        assert_eq!(breakdown.detail("total_uptime_hours"), Some(40.0));
        assert_eq!(breakdown.detail("total_credits"), Some(40.0));
        assert_eq!(breakdown.line_item(COMPUTE_COST), Some(80.0));
        assert_eq!(breakdown.monthly_cost(), 80.0);
    }

    #[test]
    fn test_storage_variant_adds_storage_cost() {
        let mut input = weekly_input("M", "eu-west-1", 10.0, 5.0);
        input.storage = Some(StorageSelection {
            service_edition: "Enterprise".to_string(),
            storage_tb: 4.0,
        });

        let breakdown = estimate(&input, &SNOWFLAKE).unwrap();

        // (10*5 + 5*2) hours * 4 credits * 2.6
        let compute = breakdown.line_item(COMPUTE_COST).unwrap();
        assert!((compute - 624.0).abs() < 1e-9);
        assert_eq!(breakdown.line_item(STORAGE_COST), Some(100.0));
        assert!((breakdown.monthly_cost() - 724.0).abs() < 1e-9);
    }

    #[test]
    fn test_usage_hours_directly() {
        let input = SnowflakeInput {
            warehouse_size: "L".to_string(),
            region: "us-west-2".to_string(),
            uptime: Uptime::Hours { usage_hours: 10.0 },
            storage: None,
        };
        let breakdown = estimate(&input, &SNOWFLAKE).unwrap();
        assert_eq!(breakdown.monthly_cost(), 160.0);
    }

    #[test]
    fn test_unknown_warehouse_size() {
        let err = estimate(&weekly_input("XXS", "us-east-1", 8.0, 0.0), &SNOWFLAKE).unwrap_err();
        assert_eq!(err, PricingError::unknown_key("warehouse size", "XXS"));
    }

    #[test]
    fn test_unknown_edition() {
        let mut input = weekly_input("XS", "us-east-1", 1.0, 1.0);
        input.storage = Some(StorageSelection {
            service_edition: "Ultimate".to_string(),
            storage_tb: 1.0,
        });
        let err = estimate(&input, &SNOWFLAKE).unwrap_err();
        assert_eq!(err.kind(), "config_error");
    }
}
