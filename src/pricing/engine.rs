use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PricingError;
use crate::pricing::catalog::{
    PricingTable, RateEntry, SnowflakeCatalog, TierEntry, FIVETRAN_TIERS, SNOWFLAKE,
};
use crate::pricing::models::{
    AirbyteCreditInput, AirbyteVolumeInput, CostBreakdown, FivetranInput, Platform, RiveryInput,
    SnowflakeInput, Uptime,
};
use crate::pricing::validation::Validate;
use crate::pricing::{airbyte, fivetran, rivery, snowflake};

/// Airbyte cost framings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirbyteFraming {
    /// Incremental data and monthly active rows
    Credits,
    /// Rows processed and data volume
    Volume,
}

/// Which uptime input the Snowflake form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UptimeMode {
    Hours,
    Weekly,
    Both,
}

/// Selectable tiers and fields for one deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub fivetran_tiers: Vec<String>,
    pub airbyte_framings: Vec<AirbyteFraming>,
    pub snowflake_storage: bool,
    pub snowflake_uptime: UptimeMode,
    pub rivery_extended: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            fivetran_tiers: FIVETRAN_TIERS.keys().map(str::to_string).collect(),
            airbyte_framings: vec![AirbyteFraming::Credits, AirbyteFraming::Volume],
            snowflake_storage: true,
            snowflake_uptime: UptimeMode::Both,
            rivery_extended: true,
        }
    }
}

impl Profile {
    /// Deployment restricted to the Enterprise and Business Critical tiers
    pub fn enterprise_only() -> Self {
        Self {
            fivetran_tiers: vec!["Enterprise".to_string(), "Business Critical".to_string()],
            ..Self::default()
        }
    }

    pub fn offers_tier(&self, tier: &str) -> bool {
        self.fivetran_tiers
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tier.trim()))
    }

    pub fn offers_framing(&self, framing: AirbyteFraming) -> bool {
        self.airbyte_framings.contains(&framing)
    }

    fn offers_uptime(&self, uptime: &Uptime) -> bool {
        matches!(
            (self.snowflake_uptime, uptime),
            (UptimeMode::Both, _)
                | (UptimeMode::Hours, Uptime::Hours { .. })
                | (UptimeMode::Weekly, Uptime::Weekly { .. })
        )
    }
}

/// One estimate request, tagged by platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum EstimateRequest {
    Fivetran(FivetranInput),
    Rivery(RiveryInput),
    Airbyte(AirbyteCreditInput),
    AirbyteVolume(AirbyteVolumeInput),
    Snowflake(SnowflakeInput),
}

impl EstimateRequest {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Fivetran(_) => Platform::Fivetran,
            Self::Rivery(_) => Platform::Rivery,
            Self::Airbyte(_) | Self::AirbyteVolume(_) => Platform::Airbyte,
            Self::Snowflake(_) => Platform::Snowflake,
        }
    }
}

/// Shared inputs for comparing the integration platforms side by side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    #[serde(default)]
    pub initial_data_load_gb: f64,
    #[serde(default)]
    pub daily_incremental_data_mb: f64,
    #[serde(default)]
    pub monthly_active_rows: f64,
    #[serde(default)]
    pub projected_growth: f64,
    /// Defaults to the first tier the profile offers
    #[serde(default)]
    pub fivetran_tier: Option<String>,
}

impl Validate for ComparisonInput {
    fn validate(&self) -> Result<(), PricingError> {
        use crate::pricing::validation::non_negative;
        non_negative("initial_data_load_gb", self.initial_data_load_gb)?;
        non_negative("daily_incremental_data_mb", self.daily_incremental_data_mb)?;
        non_negative("monthly_active_rows", self.monthly_active_rows)?;
        non_negative("projected_growth", self.projected_growth)?;
        Ok(())
    }
}

/// Pricing tables as exposed by a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub fivetran_tiers: Vec<TierEntry>,
    pub airbyte_framings: Vec<AirbyteFraming>,
    pub rivery_extended: bool,
    pub snowflake_warehouse_sizes: Vec<RateEntry>,
    pub snowflake_regions: Vec<RateEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snowflake_editions: Vec<RateEntry>,
    pub snowflake_uptime: UptimeMode,
}

/// Profile-aware front door to the pricing functions
#[derive(Debug, Clone)]
pub struct Estimator {
    profile: Profile,
    fivetran_tiers: &'static PricingTable,
    snowflake: &'static SnowflakeCatalog,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl Estimator {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            fivetran_tiers: &FIVETRAN_TIERS,
            snowflake: &SNOWFLAKE,
        }
    }

    /// Check the request against the profile and run the matching estimate
    pub fn estimate(&self, request: &EstimateRequest) -> Result<CostBreakdown, PricingError> {
        debug!(platform = %request.platform(), "Estimating cost");

        match request {
            EstimateRequest::Fivetran(input) => {
                input.validate()?;
                let (tier, _) = self.fivetran_tiers.lookup(&input.tier)?;
                if !self.profile.offers_tier(tier) {
                    return Err(PricingError::not_offered("Fivetran tier", tier));
                }
                fivetran::estimate(input, self.fivetran_tiers)
            }
            EstimateRequest::Rivery(input) => {
                if input.extra_rpu_credits.is_some() && !self.profile.rivery_extended {
                    return Err(PricingError::not_offered("Rivery option", "extra_rpu_credits"));
                }
                rivery::estimate(input)
            }
            EstimateRequest::Airbyte(input) => {
                if !self.profile.offers_framing(AirbyteFraming::Credits) {
                    return Err(PricingError::not_offered("Airbyte framing", "credits"));
                }
                airbyte::estimate_credits(input)
            }
            EstimateRequest::AirbyteVolume(input) => {
                if !self.profile.offers_framing(AirbyteFraming::Volume) {
                    return Err(PricingError::not_offered("Airbyte framing", "volume"));
                }
                airbyte::estimate_volume(input)
            }
            EstimateRequest::Snowflake(input) => {
                if input.storage.is_some() && !self.profile.snowflake_storage {
                    return Err(PricingError::not_offered("Snowflake option", "storage"));
                }
                if !self.profile.offers_uptime(&input.uptime) {
                    let key = match input.uptime {
                        Uptime::Hours { .. } => "usage_hours",
                        Uptime::Weekly { .. } => "weekly uptime",
                    };
                    return Err(PricingError::not_offered("Snowflake uptime input", key));
                }
                snowflake::estimate(input, self.snowflake)
            }
        }
    }

    /// Price Fivetran, Rivery and Airbyte on the same inputs, cheapest first
    pub fn compare(&self, input: &ComparisonInput) -> Result<Vec<CostBreakdown>, PricingError> {
        input.validate()?;

        let tier = match &input.fivetran_tier {
            Some(tier) => tier.clone(),
            None => self
                .profile
                .fivetran_tiers
                .first()
                .cloned()
                .ok_or_else(|| PricingError::not_offered("Fivetran tier", ""))?,
        };

        let mut requests = vec![
            EstimateRequest::Fivetran(FivetranInput {
                monthly_active_rows: input.monthly_active_rows,
                projected_growth: input.projected_growth,
                tier,
            }),
            EstimateRequest::Rivery(RiveryInput::default()),
        ];
        if self.profile.offers_framing(AirbyteFraming::Credits) {
            requests.push(EstimateRequest::Airbyte(AirbyteCreditInput {
                daily_incremental_data_mb: input.daily_incremental_data_mb,
                monthly_active_rows: input.monthly_active_rows,
                initial_data_load_gb: input.initial_data_load_gb,
            }));
        }

        let mut breakdowns = requests
            .iter()
            .map(|request| self.estimate(request))
            .collect::<Result<Vec<_>, _>>()?;
        breakdowns.sort_by(|a, b| a.monthly_cost().total_cmp(&b.monthly_cost()));

        Ok(breakdowns)
    }

    /// Tables and options this profile exposes
    pub fn catalog(&self) -> CatalogView {
        let fivetran_tiers = self
            .fivetran_tiers
            .listing()
            .into_iter()
            .filter(|entry| self.profile.offers_tier(entry.name))
            .collect();

        let snowflake_editions = if self.profile.snowflake_storage {
            self.snowflake.editions.listing()
        } else {
            Vec::new()
        };

        CatalogView {
            fivetran_tiers,
            airbyte_framings: self.profile.airbyte_framings.clone(),
            rivery_extended: self.profile.rivery_extended,
            snowflake_warehouse_sizes: self.snowflake.warehouse_sizes.listing(),
            snowflake_regions: self.snowflake.regions.listing(),
            snowflake_editions,
            snowflake_uptime: self.profile.snowflake_uptime,
        }
    }
}
