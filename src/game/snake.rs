use std::collections::VecDeque;

use rand::Rng;

use super::action::Direction;
use super::grid::{Cell, GridWorld};

/// What a single `advance` did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The head moved one cell. `grew` is true when the tail was kept.
    Moved { grew: bool },
    /// The head ran into the body and the snake restarted from the center
    Reset,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    world: GridWorld,
    /// Body segments, with head at index 0
    segments: VecDeque<Cell>,
    /// Current direction of movement
    direction: Direction,
    /// Direction requested since the last tick
    pending_direction: Option<Direction>,
    target_length: usize,
    last_removed_tail: Option<Cell>,
}

impl Snake {
    /// A one-cell snake at the grid center, heading right
    pub fn new(world: GridWorld) -> Self {
        Self {
            world,
            segments: VecDeque::from([world.center()]),
            direction: Direction::Right,
            pending_direction: None,
            target_length: 1,
            last_removed_tail: None,
        }
    }

    /// A snake with an explicit body, head first.
    ///
    /// The target length is the body length, so the snake keeps its size
    /// until it eats. Returns `None` for an empty body or one with a cell
    /// off the grid.
    pub fn with_body(
        world: GridWorld,
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        if segments.is_empty() || !segments.iter().all(|&cell| world.contains(cell)) {
            return None;
        }

        Some(Self {
            world,
            target_length: segments.len(),
            segments,
            direction,
            pending_direction: None,
            last_removed_tail: None,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Body segments from head to tail
    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Length the body is growing towards
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Tail cell dropped by the most recent move, if any
    pub fn last_removed_tail(&self) -> Option<Cell> {
        self.last_removed_tail
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake never loses its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Buffer a turn for the next tick.
    ///
    /// A request to reverse the current direction is dropped. A later request
    /// in the same tick replaces an earlier one.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Schedule one more segment; the body catches up on later moves
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Move one cell in the current direction.
    ///
    /// `rng` is only consulted when the move ends in a self-collision, to
    /// pick the direction the restarted snake heads off in.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Advance {
        if let Some(requested) = self.pending_direction.take() {
            if !self.direction.is_opposite(requested) {
                self.direction = requested;
            }
        }

        let new_head = self.world.step(self.head(), self.direction);

        // The neck always touches the head, so collisions start at index 2.
        if self.segments.iter().skip(2).any(|&cell| cell == new_head) {
            self.reset(rng);
            return Advance::Reset;
        }

        self.segments.push_front(new_head);
        if self.segments.len() > self.target_length {
            self.last_removed_tail = self.segments.pop_back();
            Advance::Moved { grew: false }
        } else {
            self.last_removed_tail = None;
            Advance::Moved { grew: true }
        }
    }

    /// Restart in place from the grid center with a random heading
    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.segments.clear();
        self.segments.push_back(self.world.center());
        self.target_length = 1;
        self.last_removed_tail = None;
        self.pending_direction = None;
        self.direction = Direction::random(rng);
    }
}
