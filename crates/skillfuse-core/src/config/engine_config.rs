use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{PersistenceError, SkillfuseResult};

/// Top-level engine configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path of the persisted weight configuration. `None` keeps the
    /// built-in defaults in memory only.
    pub weight_config_path: Option<String>,
    /// Whether weight updates made through the scoring service are also
    /// written to the weight config document.
    pub persist_updates: bool,
    /// Path of the SQLite feature database.
    pub feature_db_path: String,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
    /// Log filter used when `SKILLFUSE_LOG` is unset.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weight_config_path: defaults::DEFAULT_WEIGHT_CONFIG_PATH.map(str::to_string),
            persist_updates: defaults::DEFAULT_PERSIST_UPDATES,
            feature_db_path: defaults::DEFAULT_FEATURE_DB_FILENAME.to_string(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse an engine config from TOML. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> SkillfuseResult<Self> {
        toml::from_str(source).map_err(|e| {
            PersistenceError::Parse {
                path: "<engine config>".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
