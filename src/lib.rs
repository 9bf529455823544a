//! Torus Snake - a terminal snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module), free of terminal I/O
//! - Keyboard input (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
