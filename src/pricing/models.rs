use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format;

/// Platforms the estimator knows how to price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Fivetran,
    Rivery,
    Airbyte,
    Snowflake,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fivetran => "fivetran",
            Self::Rivery => "rivery",
            Self::Airbyte => "airbyte",
            Self::Snowflake => "snowflake",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fivetran => "Fivetran",
            Self::Rivery => "Rivery",
            Self::Airbyte => "Airbyte",
            Self::Snowflake => "Snowflake",
        };
        f.write_str(name)
    }
}

/// Base subscription and per-unit rate of a pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPrice {
    pub base_cost: f64,
    pub cost_per_unit: f64,
}

impl TierPrice {
    pub const fn new(base_cost: f64, cost_per_unit: f64) -> Self {
        Self {
            base_cost,
            cost_per_unit,
        }
    }
}

/// Fivetran inputs (MAR in millions, growth in percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FivetranInput {
    pub monthly_active_rows: f64,
    #[serde(default)]
    pub projected_growth: f64,
    pub tier: String,
}

/// Rivery inputs; extra RPU credits only apply to the extended variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiveryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_rpu_credits: Option<f64>,
}

/// Airbyte inputs for the credit-based framing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirbyteCreditInput {
    #[serde(default)]
    pub daily_incremental_data_mb: f64,
    /// Millions of rows
    #[serde(default)]
    pub monthly_active_rows: f64,
    #[serde(default)]
    pub initial_data_load_gb: f64,
}

/// Airbyte inputs for the rows-processed / data-volume framing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirbyteVolumeInput {
    pub rows_processed_millions: f64,
    pub data_volume_gb: f64,
}

/// How warehouse uptime is supplied
///
/// Deserializes from exactly one of `{usage_hours}` or
/// `{weekday_uptime_hours, weekend_uptime_hours}`; mixed or partial forms are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "UptimeFields")]
pub enum Uptime {
    /// Total usage hours given directly
    Hours { usage_hours: f64 },
    /// Hours per weekday and per weekend day
    Weekly {
        weekday_uptime_hours: f64,
        weekend_uptime_hours: f64,
    },
}

/// Wire shape of [`Uptime`] before the form is decided
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UptimeFields {
    usage_hours: Option<f64>,
    weekday_uptime_hours: Option<f64>,
    weekend_uptime_hours: Option<f64>,
}

impl TryFrom<UptimeFields> for Uptime {
    type Error = String;

    fn try_from(fields: UptimeFields) -> Result<Self, Self::Error> {
        match (
            fields.usage_hours,
            fields.weekday_uptime_hours,
            fields.weekend_uptime_hours,
        ) {
            (Some(usage_hours), None, None) => Ok(Self::Hours { usage_hours }),
            (None, Some(weekday_uptime_hours), Some(weekend_uptime_hours)) => Ok(Self::Weekly {
                weekday_uptime_hours,
                weekend_uptime_hours,
            }),
            (Some(_), _, _) => Err(
                "uptime takes either usage_hours or weekday/weekend hours, not both".to_string(),
            ),
            _ => Err(
                "uptime needs usage_hours, or both weekday_uptime_hours and weekend_uptime_hours"
                    .to_string(),
            ),
        }
    }
}

impl Uptime {
    /// Total billable hours: five weekdays plus two weekend days for the weekly form
    pub fn total_hours(&self) -> f64 {
        match *self {
            Self::Hours { usage_hours } => usage_hours,
            Self::Weekly {
                weekday_uptime_hours,
                weekend_uptime_hours,
            } => weekday_uptime_hours * 5.0 + weekend_uptime_hours * 2.0,
        }
    }
}

/// Storage selection for the Snowflake storage variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSelection {
    pub service_edition: String,
    #[serde(default)]
    pub storage_tb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowflakeInput {
    pub warehouse_size: String,
    pub region: String,
    pub uptime: Uptime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageSelection>,
}

/// A single named cost component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Intermediate quantity shown alongside the cost lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub name: String,
    pub value: f64,
}

/// How the initial load is charged
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialSetup {
    /// No separate charge
    Included { note: String },
    /// One-time charge, never folded into monthly or annual cost
    OneTime { amount: f64 },
}

impl InitialSetup {
    pub fn included(note: impl Into<String>) -> Self {
        Self::Included { note: note.into() }
    }
}

impl fmt::Display for InitialSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Included { note } => f.write_str(note),
            Self::OneTime { amount } => write!(f, "{} one-time", format::currency(*amount)),
        }
    }
}

/// Computed cost estimate for one platform
///
/// Monthly cost is the sum of the line items and annual cost is always
/// twelve times the monthly cost. Both are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    platform: Platform,
    label: String,
    line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<Detail>,
    monthly_cost: f64,
    annual_cost: f64,
    initial_setup: InitialSetup,
}

impl CostBreakdown {
    pub fn new(
        platform: Platform,
        label: impl Into<String>,
        line_items: Vec<LineItem>,
        initial_setup: InitialSetup,
    ) -> Self {
        let monthly_cost: f64 = line_items.iter().map(|item| item.amount).sum();
        Self {
            platform,
            label: label.into(),
            line_items,
            details: Vec::new(),
            monthly_cost,
            annual_cost: monthly_cost * 12.0,
            initial_setup,
        }
    }

    pub fn with_detail(mut self, name: impl Into<String>, value: f64) -> Self {
        self.details.push(Detail {
            name: name.into(),
            value,
        });
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Amount of the named line item, if present
    pub fn line_item(&self, name: &str) -> Option<f64> {
        self.line_items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.amount)
    }

    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    pub fn detail(&self, name: &str) -> Option<f64> {
        self.details
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value)
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }

    pub fn annual_cost(&self) -> f64 {
        self.annual_cost
    }

    pub fn initial_setup(&self) -> &InitialSetup {
        &self.initial_setup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_forms_deserialize() {
        let hours: Uptime = serde_json::from_str(r#"{"usage_hours": 12}"#).unwrap();
        assert_eq!(hours, Uptime::Hours { usage_hours: 12.0 });

        let weekly: Uptime =
            serde_json::from_str(r#"{"weekday_uptime_hours": 8, "weekend_uptime_hours": 2}"#)
                .unwrap();
        assert_eq!(weekly.total_hours(), 44.0);
    }

    #[test]
    fn test_uptime_rejects_mixed_and_partial_forms() {
        let mixed = serde_json::from_str::<Uptime>(
            r#"{"usage_hours": 10, "weekday_uptime_hours": 8, "weekend_uptime_hours": 0}"#,
        );
        assert!(mixed.unwrap_err().to_string().contains("not both"));

        assert!(serde_json::from_str::<Uptime>(r#"{"weekday_uptime_hours": 8}"#).is_err());
        assert!(serde_json::from_str::<Uptime>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<Uptime>(r#"{"hours": 8}"#).is_err());
    }

    #[test]
    fn test_breakdown_totals() {
        let breakdown = CostBreakdown::new(
            Platform::Fivetran,
            "Standard tier",
            vec![LineItem::new("Base cost", 3000.0), LineItem::new("Additional MAR cost", 250.0)],
            InitialSetup::included("Included in monthly cost"),
        );

        assert_eq!(breakdown.monthly_cost(), 3250.0);
        assert_eq!(breakdown.annual_cost(), breakdown.monthly_cost() * 12.0);
        assert_eq!(breakdown.line_item("Base cost"), Some(3000.0));
        assert_eq!(breakdown.line_item("Storage cost"), None);
    }

    #[test]
    fn test_uptime_total_hours() {
        let weekly = Uptime::Weekly {
            weekday_uptime_hours: 8.0,
            weekend_uptime_hours: 3.0,
        };
        assert_eq!(weekly.total_hours(), 46.0);
        assert_eq!(Uptime::Hours { usage_hours: 12.5 }.total_hours(), 12.5);
    }

    #[test]
    fn test_uptime_deserializes_either_form() {
        let hours: Uptime = serde_json::from_str(r#"{"usage_hours": 100}"#).unwrap();
        assert_eq!(hours, Uptime::Hours { usage_hours: 100.0 });

        let weekly: Uptime =
            serde_json::from_str(r#"{"weekday_uptime_hours": 8, "weekend_uptime_hours": 2}"#)
                .unwrap();
        assert_eq!(weekly.total_hours(), 44.0);
    }

    #[test]
    fn test_initial_setup_display() {
        assert_eq!(
            InitialSetup::included("Free initial load of up to 4TB").to_string(),
            "Free initial load of up to 4TB"
        );
        assert_eq!(
            InitialSetup::OneTime { amount: 1000.0 }.to_string(),
            "$1,000.00 one-time"
        );
    }
}
