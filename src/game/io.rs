//! Seams between the game core and the outside world.
//!
//! The core never touches a terminal, a keyboard or a clock directly. It is
//! handed implementations of these traits instead, which keeps every tick
//! reproducible in tests.

use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;

use super::action::Direction;
use super::grid::{Cell, GridWorld};

/// One thing the player asked for since the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
}

/// Read-only view of the game handed to the renderer once per tick
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub world: GridWorld,
    /// Snake body, head first
    pub segments: &'a VecDeque<Cell>,
    pub apple: Cell,
    /// Cell the snake just left, if its tail moved
    pub erased_tail: Option<Cell>,
}

/// Source of player input, drained without blocking
pub trait InputSource {
    fn drain(&mut self) -> Result<Vec<InputEvent>>;
}

/// Something that draws frames
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()>;
}

/// Paces ticks
#[async_trait]
pub trait Clock: Send {
    /// Resolve when the next tick is due
    async fn tick(&mut self);
}
