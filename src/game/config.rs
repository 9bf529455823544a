use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::apple::Placement;
use super::error::ConfigError;
use super::grid::GridWorld;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    /// Snake moves per second
    pub ticks_per_second: u32,
    /// Where new apples may appear
    pub placement: Placement,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 640x480 screen cut into 20px cells
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            ticks_per_second: 20,
            placement: Placement::Anywhere,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the grid settings
    pub fn grid(&self) -> Result<GridWorld, ConfigError> {
        GridWorld::new(self.grid_width, self.grid_height, self.cell_size)
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(Duration::from_secs(1) / self.ticks_per_second)
    }
}
