use crate::game::{Advance, StepInfo};

/// Running totals for one play session. Logged, never drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub apples_eaten: u32,
    pub resets: u32,
    pub longest_snake: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            longest_snake: 1,
            ..Default::default()
        }
    }

    /// Fold one tick into the totals
    pub fn record(&mut self, info: StepInfo, snake_len: usize) {
        self.ticks += 1;
        if info.ate_apple {
            self.apples_eaten += 1;
        }
        if info.outcome == Advance::Reset {
            self.resets += 1;
        }
        self.longest_snake = self.longest_snake.max(snake_len);
    }
}
