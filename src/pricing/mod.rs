pub mod airbyte;
pub mod catalog;
pub mod engine;
pub mod fivetran;
pub mod models;
pub mod rivery;
pub mod snowflake;
pub mod validation;

pub use catalog::{PricingTable, RateTable, SnowflakeCatalog, FIVETRAN_TIERS, SNOWFLAKE};
pub use engine::{
    AirbyteFraming, CatalogView, ComparisonInput, EstimateRequest, Estimator, Profile, UptimeMode,
};
pub use models::{
    AirbyteCreditInput, AirbyteVolumeInput, CostBreakdown, FivetranInput, InitialSetup, LineItem,
    Platform, RiveryInput, SnowflakeInput, StorageSelection, TierPrice, Uptime,
};
pub use validation::Validate;
