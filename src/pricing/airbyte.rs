//! Airbyte pricing
//!
//! Two framings are supported and kept separate: the credit framing
//! (incremental data plus database rows) and the volume framing
//! (rows processed plus data volume). They are different formulas.

use tracing::debug;

use crate::error::PricingError;
use crate::pricing::catalog::{
    AIRBYTE_API_CREDITS_PER_GB, AIRBYTE_CREDIT_PRICE, AIRBYTE_DB_CREDITS_PER_UNIT,
    AIRBYTE_ROW_RATE, AIRBYTE_VOLUME_RATE, DAYS_PER_MONTH,
};
use crate::pricing::models::{
    AirbyteCreditInput, AirbyteVolumeInput, CostBreakdown, InitialSetup, LineItem, Platform,
};
use crate::pricing::validation::{finite_totals, Validate};

pub const API_CREDITS_COST: &str = "API credits";
pub const DB_CREDITS_COST: &str = "Database credits";
pub const ROWS_COST: &str = "Rows processed";
pub const VOLUME_COST: &str = "Data volume";

/// Credit framing: monthly projection of daily API volume plus database rows
pub fn estimate_credits(input: &AirbyteCreditInput) -> Result<CostBreakdown, PricingError> {
    input.validate()?;

    // MB per day -> GB per month
    let monthly_gb = input.daily_incremental_data_mb * DAYS_PER_MONTH / 1000.0;
    let api_credits_cost = monthly_gb * AIRBYTE_API_CREDITS_PER_GB * AIRBYTE_CREDIT_PRICE;
    let db_credits_cost =
        input.monthly_active_rows * AIRBYTE_DB_CREDITS_PER_UNIT * AIRBYTE_CREDIT_PRICE;
    let initial_setup_cost =
        input.initial_data_load_gb * AIRBYTE_DB_CREDITS_PER_UNIT * AIRBYTE_CREDIT_PRICE;

    debug!(
        api_credits_cost,
        db_credits_cost, initial_setup_cost, "Computed Airbyte credit estimate"
    );

    let breakdown = CostBreakdown::new(
        Platform::Airbyte,
        "Airbyte (credits)",
        vec![
            LineItem::new(API_CREDITS_COST, api_credits_cost),
            LineItem::new(DB_CREDITS_COST, db_credits_cost),
        ],
        InitialSetup::OneTime {
            amount: initial_setup_cost,
        },
    )
    .with_detail("monthly_api_gb", monthly_gb);

    finite_totals(breakdown)
}

/// Volume framing: rows processed (millions) and data volume (GB) at fixed rates
pub fn estimate_volume(input: &AirbyteVolumeInput) -> Result<CostBreakdown, PricingError> {
    input.validate()?;

    let rows_cost = input.rows_processed_millions * AIRBYTE_ROW_RATE;
    let volume_cost = input.data_volume_gb * AIRBYTE_VOLUME_RATE;

    debug!(rows_cost, volume_cost, "Computed Airbyte volume estimate");

    finite_totals(CostBreakdown::new(
        Platform::Airbyte,
        "Airbyte (volume)",
        vec![
            LineItem::new(ROWS_COST, rows_cost),
            LineItem::new(VOLUME_COST, volume_cost),
        ],
        InitialSetup::included("No separate setup charge"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_only() {
        let breakdown = estimate_credits(&AirbyteCreditInput {
            daily_incremental_data_mb: 0.0,
            monthly_active_rows: 1.0,
            initial_data_load_gb: 0.0,
        })
        .unwrap();

        assert_eq!(breakdown.line_item(API_CREDITS_COST), Some(0.0));
        assert_eq!(breakdown.line_item(DB_CREDITS_COST), Some(10.0));
        assert_eq!(breakdown.monthly_cost(), 10.0);
        assert_eq!(breakdown.annual_cost(), 120.0);
    }

    #[test]
    fn test_daily_data_projected_over_month() {
        // 1000 MB/day -> 30 GB/month -> 180 credits -> 450
        let breakdown = estimate_credits(&AirbyteCreditInput {
            daily_incremental_data_mb: 1000.0,
            ..Default::default()
        })
        .unwrap();

        let api = breakdown.line_item(API_CREDITS_COST).unwrap();
        assert!((api - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_load_is_one_time() {
        let breakdown = estimate_credits(&AirbyteCreditInput {
            initial_data_load_gb: 100.0,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(breakdown.monthly_cost(), 0.0);
        assert_eq!(
            breakdown.initial_setup(),
            &InitialSetup::OneTime { amount: 1000.0 }
        );
    }

    #[test]
    fn test_volume_framing() {
        let breakdown = estimate_volume(&AirbyteVolumeInput {
            rows_processed_millions: 500.0,
            data_volume_gb: 200.0,
        })
        .unwrap();

        assert!((breakdown.line_item(ROWS_COST).unwrap() - 5.0).abs() < 1e-9);
        assert!((breakdown.line_item(VOLUME_COST).unwrap() - 3.0).abs() < 1e-9);
        assert!((breakdown.monthly_cost() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_framings_differ_for_same_quantities() {
        let credits = estimate_credits(&AirbyteCreditInput {
            monthly_active_rows: 10.0,
            ..Default::default()
        })
        .unwrap();
        let volume = estimate_volume(&AirbyteVolumeInput {
            rows_processed_millions: 10.0,
            data_volume_gb: 0.0,
        })
        .unwrap();

        assert_ne!(credits.monthly_cost(), volume.monthly_cost());
    }

    #[test]
    fn test_negative_volume_rejected() {
        let err = estimate_volume(&AirbyteVolumeInput {
            rows_processed_millions: 1.0,
            data_volume_gb: -5.0,
        })
        .unwrap_err();
        assert_eq!(err, PricingError::validation("data_volume_gb", -5.0));
    }
}
