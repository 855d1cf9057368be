use std::path::Path;

use serde::Deserialize;

use crate::clock_wall::DEFAULT_COLUMNS;
use crate::clock_widget::{DEFAULT_CLOCK_SIZE, MIN_CLOCK_SIZE};
use crate::error::ClockError;
use crate::zones::resolve_zone;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1100.0,
            height: 800.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WallConfig {
    /// Number of clocks per row
    pub columns: usize,
    /// Largest side of a clock; clocks shrink to fit narrower cells
    pub clock_size: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig {
            columns: DEFAULT_COLUMNS,
            clock_size: DEFAULT_CLOCK_SIZE,
        }
    }
}

/// Settings of the application. Every field has a default, so an empty file is valid.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub wall: WallConfig,
    /// Zone preselected in the "main time zone" list
    pub main_zone: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ClockError> {
        if self.wall.columns == 0 {
            return Err(ClockError::InvalidConfig(
                "wall.columns must be at least 1".to_string(),
            ));
        }
        if self.wall.clock_size < MIN_CLOCK_SIZE {
            return Err(ClockError::InvalidConfig(format!(
                "wall.clock_size must be at least {MIN_CLOCK_SIZE}"
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ClockError::InvalidConfig(
                "window size must be positive".to_string(),
            ));
        }
        if let Some(zone) = &self.main_zone {
            resolve_zone(zone)?;
        }
        Ok(())
    }
}

/// Parses and validates a TOML configuration.
pub fn import_config(str: &str) -> Result<Config, ClockError> {
    let config: Config = toml::from_str(str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ClockError> {
    log::info!("Loading the configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    import_config(&content)
}
