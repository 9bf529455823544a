use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the game configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid {axis} must be at least one cell")]
    EmptyGrid { axis: &'static str },

    #[error("grid {axis} of {value} cells is too large")]
    GridTooLarge { axis: &'static str, value: u32 },

    #[error("grid {axis} of {cells} cells at {cell_size}px does not fit in u32 pixels")]
    ScreenTooLarge {
        axis: &'static str,
        cells: u32,
        cell_size: u32,
    },

    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
