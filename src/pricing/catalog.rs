//! Static pricing data
//!
//! All tables are process-wide constants and never change at runtime.

use serde::Serialize;

use crate::error::PricingError;
use crate::pricing::models::TierPrice;

/// Ordered lookup table keyed by a display label
#[derive(Debug)]
pub struct RateTable<T: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, T)],
}

pub type PricingTable = RateTable<TierPrice>;

impl<T: Copy> RateTable<T> {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, T)]) -> Self {
        Self { name, entries }
    }

    /// Look up a key (ASCII case-insensitive), returning the canonical key and its value
    pub fn lookup(&self, key: &str) -> Result<(&'static str, T), PricingError> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(name, value)| (*name, *value))
            .ok_or_else(|| PricingError::unknown_key(self.name, key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn entries(&self) -> &'static [(&'static str, T)] {
        self.entries
    }
}

/// Snowflake warehouse, region and edition tables
#[derive(Debug)]
pub struct SnowflakeCatalog {
    /// Credits consumed per hour by warehouse size
    pub warehouse_sizes: RateTable<f64>,
    /// Price of one credit by region
    pub regions: RateTable<f64>,
    /// Storage price per TB per month by service edition
    pub editions: RateTable<f64>,
}

/// Millions of monthly active rows covered by every Fivetran base subscription
pub const FIVETRAN_INCLUDED_MAR: f64 = 10.0;

pub static FIVETRAN_TIERS: PricingTable = RateTable::new(
    "Fivetran tier",
    &[
        ("Starter", TierPrice::new(2000.0, 47.22)),
        ("Standard", TierPrice::new(3000.0, 70.83)),
        ("Enterprise", TierPrice::new(4000.0, 94.44)),
        ("Business Critical", TierPrice::new(10000.0, 55.56)),
    ],
);

pub const RIVERY_BASE_MONTHLY: f64 = 2083.0;
pub const RIVERY_COST_PER_RPU: f64 = 0.75;
pub const RIVERY_INITIAL_SETUP: &str = "Free initial load of up to 4TB";

pub const AIRBYTE_CREDIT_PRICE: f64 = 2.5;
/// Credits per GB of synced API data
pub const AIRBYTE_API_CREDITS_PER_GB: f64 = 6.0;
/// Credits per million database rows, also applied per GB of initial load
pub const AIRBYTE_DB_CREDITS_PER_UNIT: f64 = 4.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const AIRBYTE_ROW_RATE: f64 = AIRBYTE_DB_CREDITS_PER_UNIT * AIRBYTE_CREDIT_PRICE / 1000.0;
pub const AIRBYTE_VOLUME_RATE: f64 = AIRBYTE_API_CREDITS_PER_GB * AIRBYTE_CREDIT_PRICE / 1000.0;

pub static SNOWFLAKE: SnowflakeCatalog = SnowflakeCatalog {
    warehouse_sizes: RateTable::new(
        "warehouse size",
        &[
            ("XS", 1.0),
            ("S", 2.0),
            ("M", 4.0),
            ("L", 8.0),
            ("XL", 16.0),
            ("2XL", 32.0),
            ("3XL", 64.0),
            ("4XL", 128.0),
            ("5XL", 256.0),
            ("6XL", 512.0),
        ],
    ),
    regions: RateTable::new(
        "region",
        &[
            ("us-east-1", 2.0),
            ("us-west-2", 2.0),
            ("ca-central-1", 2.25),
            ("eu-west-1", 2.6),
            ("eu-central-1", 2.7),
            ("ap-southeast-2", 2.75),
            ("ap-northeast-1", 2.85),
        ],
    ),
    editions: RateTable::new(
        "service edition",
        &[
            ("Standard", 23.0),
            ("Enterprise", 25.0),
            ("Business Critical", 30.0),
        ],
    ),
};

/// Serializable row of a numeric rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateEntry {
    pub name: &'static str,
    pub rate: f64,
}

/// Serializable row of a tier table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierEntry {
    pub name: &'static str,
    pub base_cost: f64,
    pub cost_per_unit: f64,
}

impl RateTable<f64> {
    pub fn listing(&self) -> Vec<RateEntry> {
        self.entries
            .iter()
            .map(|&(name, rate)| RateEntry { name, rate })
            .collect()
    }
}

impl PricingTable {
    pub fn listing(&self) -> Vec<TierEntry> {
        self.entries
            .iter()
            .map(|&(name, price)| TierEntry {
                name,
                base_cost: price.base_cost,
                cost_per_unit: price.cost_per_unit,
            })
            .collect()
    }
}
