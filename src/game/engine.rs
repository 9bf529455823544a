use rand::Rng;
use tracing::{debug, info};

use super::{
    action::Direction,
    apple::{Apple, Placement},
    grid::GridWorld,
    io::RenderFrame,
    snake::{Advance, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// What the snake did this step
    pub outcome: Advance,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
}

/// The game engine that handles all game logic
#[derive(Debug)]
pub struct GameEngine<R> {
    world: GridWorld,
    snake: Snake,
    apple: Apple,
    rng: R,
}

impl<R: Rng> GameEngine<R> {
    /// Start a game with a fresh snake and a randomly placed apple
    pub fn new(world: GridWorld, placement: Placement, mut rng: R) -> Self {
        let snake = Snake::new(world);
        let apple = Apple::new(world, placement, &mut rng);

        Self {
            world,
            snake,
            apple,
            rng,
        }
    }

    /// Start from an explicit snake and apple
    pub fn with_state(world: GridWorld, snake: Snake, apple: Apple, rng: R) -> Self {
        Self {
            world,
            snake,
            apple,
            rng,
        }
    }

    pub fn world(&self) -> GridWorld {
        self.world
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Execute one step of the game.
    ///
    /// Turn requests are applied in order, so the last legal one wins.
    pub fn step(&mut self, requests: impl IntoIterator<Item = Direction>) -> StepInfo {
        for direction in requests {
            self.snake.request_direction(direction);
        }

        let outcome = self.snake.advance(&mut self.rng);
        if outcome == Advance::Reset {
            info!(
                head = ?self.snake.head(),
                direction = ?self.snake.direction(),
                "snake hit itself, restarting"
            );
            return StepInfo {
                outcome,
                ate_apple: false,
            };
        }

        let ate_apple = self.snake.head() == self.apple.cell();
        if ate_apple {
            self.snake.grow();
            self.apple.relocate(self.snake.segments(), &mut self.rng);
            debug!(
                target_length = self.snake.target_length(),
                apple = ?self.apple.cell(),
                "apple eaten"
            );
        }

        StepInfo { outcome, ate_apple }
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            world: self.world,
            segments: self.snake.segments(),
            apple: self.apple.cell(),
            erased_tail: self.snake.last_removed_tail(),
        }
    }
}
