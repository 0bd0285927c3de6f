//! Configuration for [`Space`](crate::Space) construction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables applied when a space is created.
///
/// Every field is optional in TOML; missing fields take their defaults.
///
/// ```
/// # use space::SpaceConfig;
/// let config = SpaceConfig::from_toml_str("label = \"root\"").unwrap();
/// assert_eq!(config.label.as_deref(), Some("root"));
/// assert_eq!(config.initial_capacity, SpaceConfig::default().initial_capacity);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SpaceConfig {
    /// Number of allocations to reserve up front.
    pub initial_capacity: usize,

    /// Shows up in log events for the space.
    pub label: Option<String>,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            label: None,
        }
    }
}

impl SpaceConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read space config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse space config: {0}")]
    Parse(#[from] toml::de::Error),
}
