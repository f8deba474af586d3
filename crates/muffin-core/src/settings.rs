use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `muffin_generate=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingSettings {
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorySettings {
    pub logging: LoggingSettings,
}

pub fn parse_settings(content: &str) -> Result<FactorySettings> {
    let settings: FactorySettings = toml::from_str(content)?;
    settings.logging.validate()?;
    Ok(settings)
}

/// Loads settings from `path`, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> Result<FactorySettings> {
    if !path.exists() {
        return Ok(FactorySettings::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}
