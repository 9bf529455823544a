use std::collections::HashSet;

use rand::{Rng, seq::IteratorRandom};
use serde::{Deserialize, Serialize};

use super::grid::{Cell, GridWorld};

/// How a new apple cell is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Any cell of the grid, even one under the snake
    #[default]
    Anywhere,
    /// Only cells the snake does not occupy, when there are any
    FreeCell,
}

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    world: GridWorld,
    placement: Placement,
    cell: Cell,
}

impl Apple {
    /// Place a new apple somewhere on the grid
    pub fn new<R: Rng + ?Sized>(world: GridWorld, placement: Placement, rng: &mut R) -> Self {
        Self {
            world,
            placement,
            cell: world.random_cell(rng),
        }
    }

    /// Place the apple on a known cell
    pub fn at(world: GridWorld, placement: Placement, cell: Cell) -> Self {
        Self {
            world,
            placement,
            cell,
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Move the apple to a fresh random cell.
    ///
    /// `occupied` only matters under [`Placement::FreeCell`]; with
    /// [`Placement::Anywhere`] the first draw is kept even if it lands on
    /// the snake.
    pub fn relocate<'a, R, I>(&mut self, occupied: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        self.cell = match self.placement {
            Placement::Anywhere => self.world.random_cell(rng),
            Placement::FreeCell => {
                let occupied: HashSet<Cell> = occupied.into_iter().copied().collect();
                self.world
                    .cells()
                    .filter(|cell| !occupied.contains(cell))
                    .choose(rng)
                    .unwrap_or_else(|| self.world.random_cell(rng))
            }
        };
    }
}
