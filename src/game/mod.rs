//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Input, drawing and pacing come in through the traits in [`io`].

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use apple::{Apple, Placement};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo};
pub use error::ConfigError;
pub use grid::{Cell, GridWorld, cell_to_pixel};
pub use io::{Clock, InputEvent, InputSource, RenderFrame, RenderSink};
pub use session::{GameLoop, TickControl};
pub use snake::{Advance, Snake};
