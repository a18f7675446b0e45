use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::{Profile, FIVETRAN_TIERS};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load configuration from `path` (optional) with `COSTCALC__*` environment overrides
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("COSTCALC")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("profile.fivetran_tiers")
                .with_list_parse_key("profile.airbyte_framings"),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    if !LOG_LEVELS.contains(&cfg.logging.level.to_lowercase().as_str()) {
        anyhow::bail!(
            "Invalid log level '{}': expected one of {}",
            cfg.logging.level,
            LOG_LEVELS.join(", ")
        );
    }

    // Every offered tier must exist in the pricing table
    if cfg.profile.fivetran_tiers.is_empty() {
        anyhow::bail!("At least one Fivetran tier must be offered");
    }
    for tier in &cfg.profile.fivetran_tiers {
        if !FIVETRAN_TIERS.contains(tier) {
            anyhow::bail!(
                "Offered Fivetran tier '{}' is not in the pricing table (known: {})",
                tier,
                FIVETRAN_TIERS.keys().collect::<Vec<_>>().join(", ")
            );
        }
    }

    if cfg.profile.airbyte_framings.is_empty() {
        anyhow::bail!("At least one Airbyte framing must be offered");
    }

    Ok(())
}
