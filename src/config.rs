use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Creation-time knobs for a world. Everything here is fixed once the
/// world is built; there is no live reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Horizontal edge length of a chunk, in blocks
    pub chunk_size: u32,
    /// Vertical extent of every chunk, in blocks
    pub world_height: u32,
    /// Chebyshev radius of the streamed chunk square
    pub render_distance: i32,
    /// Horizontal scale fed to the terrain noise
    pub noise_frequency: f64,
    /// Terrain seed
    pub seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 16,
            world_height: 128,
            render_distance: 5,
            noise_frequency: 0.05,
            seed: 12345,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl WorldConfig {
    /// Load a config from a TOML file. Fields missing from the file
    /// fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: WorldConfig =
            toml::from_str(&data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no world can be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk_size must be positive".into()));
        }
        if self.world_height == 0 {
            return Err(ConfigError::Invalid("world_height must be positive".into()));
        }
        if self.render_distance < 0 {
            return Err(ConfigError::Invalid(
                "render_distance must not be negative".into(),
            ));
        }
        if !self.noise_frequency.is_finite() || self.noise_frequency <= 0.0 {
            return Err(ConfigError::Invalid(
                "noise_frequency must be positive".into(),
            ));
        }
        Ok(())
    }
}
