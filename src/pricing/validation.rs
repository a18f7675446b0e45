use crate::error::PricingError;
use crate::pricing::models::{
    AirbyteCreditInput, AirbyteVolumeInput, CostBreakdown, FivetranInput, InitialSetup,
    RiveryInput, SnowflakeInput, Uptime,
};

/// Input records that must be checked before any computation runs
pub trait Validate {
    fn validate(&self) -> Result<(), PricingError>;
}

/// Reject negative, NaN and infinite values
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::validation(field, value))
    }
}

/// Reject a computed estimate whose totals overflowed
///
/// Inputs are finite, but large enough values still multiply out to infinity.
pub fn finite_totals(breakdown: CostBreakdown) -> Result<CostBreakdown, PricingError> {
    non_negative("monthly_cost", breakdown.monthly_cost())?;
    non_negative("annual_cost", breakdown.annual_cost())?;
    if let InitialSetup::OneTime { amount } = *breakdown.initial_setup() {
        non_negative("initial_setup_cost", amount)?;
    }
    Ok(breakdown)
}

impl Validate for FivetranInput {
    fn validate(&self) -> Result<(), PricingError> {
        non_negative("monthly_active_rows", self.monthly_active_rows)?;
        non_negative("projected_growth", self.projected_growth)?;
        Ok(())
    }
}

impl Validate for RiveryInput {
    fn validate(&self) -> Result<(), PricingError> {
        if let Some(credits) = self.extra_rpu_credits {
            non_negative("extra_rpu_credits", credits)?;
        }
        Ok(())
    }
}

impl Validate for AirbyteCreditInput {
    fn validate(&self) -> Result<(), PricingError> {
        non_negative("daily_incremental_data_mb", self.daily_incremental_data_mb)?;
        non_negative("monthly_active_rows", self.monthly_active_rows)?;
        non_negative("initial_data_load_gb", self.initial_data_load_gb)?;
        Ok(())
    }
}

impl Validate for AirbyteVolumeInput {
    fn validate(&self) -> Result<(), PricingError> {
        non_negative("rows_processed_millions", self.rows_processed_millions)?;
        non_negative("data_volume_gb", self.data_volume_gb)?;
        Ok(())
    }
}

impl Validate for Uptime {
    fn validate(&self) -> Result<(), PricingError> {
        match *self {
            Self::Hours { usage_hours } => {
                non_negative("usage_hours", usage_hours)?;
            }
            Self::Weekly {
                weekday_uptime_hours,
                weekend_uptime_hours,
            } => {
                non_negative("weekday_uptime_hours", weekday_uptime_hours)?;
                non_negative("weekend_uptime_hours", weekend_uptime_hours)?;
            }
        }
        Ok(())
    }
}

impl Validate for SnowflakeInput {
    fn validate(&self) -> Result<(), PricingError> {
        self.uptime.validate()?;
        if let Some(storage) = &self.storage {
            non_negative("storage_tb", storage.storage_tb)?;
        }
        Ok(())
    }
}
