use tracing::debug;

use crate::error::PricingError;
use crate::pricing::catalog::{PricingTable, FIVETRAN_INCLUDED_MAR};
use crate::pricing::models::{CostBreakdown, FivetranInput, InitialSetup, LineItem, Platform};
use crate::pricing::validation::{finite_totals, Validate};

pub const BASE_COST: &str = "Base cost";
pub const ADDITIONAL_COST: &str = "Additional MAR cost";

/// Estimate Fivetran cost for a tier
///
/// The base subscription covers the first 10M MAR; rows above that are
/// billed at the tier's per-million rate after applying projected growth.
pub fn estimate(input: &FivetranInput, tiers: &PricingTable) -> Result<CostBreakdown, PricingError> {
    input.validate()?;
    let (tier, price) = tiers.lookup(&input.tier)?;

    let total_mar = input.monthly_active_rows * (1.0 + input.projected_growth / 100.0);
    let additional_cost = ((total_mar - FIVETRAN_INCLUDED_MAR) * price.cost_per_unit).max(0.0);

    debug!(
        tier,
        total_mar,
        additional_cost,
        "Computed Fivetran estimate"
    );

    let breakdown = CostBreakdown::new(
        Platform::Fivetran,
        format!("{} tier", tier),
        vec![
            LineItem::new(BASE_COST, price.base_cost),
            LineItem::new(ADDITIONAL_COST, additional_cost),
        ],
        InitialSetup::included("Included in monthly cost"),
    )
    .with_detail("total_mar_millions", total_mar);

    finite_totals(breakdown)
}
