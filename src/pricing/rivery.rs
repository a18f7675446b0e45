use tracing::debug;

use crate::error::PricingError;
use crate::pricing::catalog::{RIVERY_BASE_MONTHLY, RIVERY_COST_PER_RPU, RIVERY_INITIAL_SETUP};
use crate::pricing::models::{CostBreakdown, InitialSetup, LineItem, Platform, RiveryInput};
use crate::pricing::validation::{finite_totals, Validate};

pub const BASE_SUBSCRIPTION: &str = "Base subscription";
pub const EXTRA_RPU_COST: &str = "Extra RPU credits";

/// Estimate Rivery cost: a fixed subscription plus optional extra RPU credits
pub fn estimate(input: &RiveryInput) -> Result<CostBreakdown, PricingError> {
    input.validate()?;

    let mut line_items = vec![LineItem::new(BASE_SUBSCRIPTION, RIVERY_BASE_MONTHLY)];
    let label = match input.extra_rpu_credits {
        Some(credits) => {
            let additional_cost = credits * RIVERY_COST_PER_RPU;
            debug!(credits, additional_cost, "Computed Rivery RPU cost");
            line_items.push(LineItem::new(EXTRA_RPU_COST, additional_cost));
            "Base subscription with extra RPU credits"
        }
        None => "Base subscription",
    };

    finite_totals(CostBreakdown::new(
        Platform::Rivery,
        label,
        line_items,
        InitialSetup::included(RIVERY_INITIAL_SETUP),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_cost() {
        let breakdown = estimate(&RiveryInput::default()).unwrap();
        assert_eq!(breakdown.monthly_cost(), 2083.0);
        assert_eq!(breakdown.annual_cost(), 24996.0);
        assert_eq!(breakdown.line_items().len(), 1);
    }

    #[test]
    fn test_extra_rpu_credits() {
        let breakdown = estimate(&RiveryInput {
            extra_rpu_credits: Some(100.0),
        })
        .unwrap();
        assert_eq!(breakdown.line_item(EXTRA_RPU_COST), Some(75.0));
        assert_eq!(breakdown.monthly_cost(), 2158.0);
    }

    #[test]
    fn test_negative_credits_rejected() {
        let err = estimate(&RiveryInput {
            extra_rpu_credits: Some(-3.0),
        })
        .unwrap_err();
        assert_eq!(err, PricingError::validation("extra_rpu_credits", -3.0));
    }
}
