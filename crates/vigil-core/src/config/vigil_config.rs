//! Top-level Vigil configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{IngestConfig, MappingConfig};
use crate::errors::ConfigError;
use crate::taxonomy::Role;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VIGIL_*`)
/// 2. Session config (`vigil.toml` in the session root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub ingest: IngestConfig,
    pub mappings: MappingConfig,
}

impl VigilConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let session_config_path = root.join("vigil.toml");
        let mut config = if session_config_path.exists() {
            let content = std::fs::read_to_string(&session_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: session_config_path.display().to_string(),
                }
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: session_config_path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VigilConfig) -> Result<(), ConfigError> {
        if config.ingest.required_columns.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.required_columns".to_string(),
                message: "must name at least one column".to_string(),
            });
        }
        for (name, label) in &config.mappings.members {
            if Role::parse(label).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("mappings.members.{name}"),
                    message: format!("unknown role label '{label}'"),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `VIGIL_INGEST_HEADER_ROW`, `VIGIL_INGEST_DELIMITER`.
    fn apply_env_overrides(config: &mut VigilConfig) {
        if let Ok(val) = std::env::var("VIGIL_INGEST_HEADER_ROW") {
            if let Ok(v) = val.parse::<usize>() {
                config.ingest.header_row = v;
            }
        }
        if let Ok(val) = std::env::var("VIGIL_INGEST_DELIMITER") {
            if let Some(c) = val.chars().next() {
                config.ingest.delimiter = c;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
