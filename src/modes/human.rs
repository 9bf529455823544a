use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::info;

use crate::game::{Clock, GameConfig, GameEngine, GameLoop, GridWorld, Placement, cell_to_pixel};
use crate::input::KeyboardInput;
use crate::render::TerminalRenderer;

/// Fixed-rate clock backed by a tokio interval
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        // A slow frame delays the next tick instead of bunching ticks up.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Clock for IntervalClock {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

pub struct HumanMode {
    world: GridWorld,
    placement: Placement,
    tick_interval: Duration,
    seed: Option<u64>,
}

impl HumanMode {
    /// Validate the configuration up front so a bad grid fails before the
    /// terminal is touched
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Result<Self> {
        let world = config.grid().context("Invalid grid configuration")?;
        let tick_interval = config
            .tick_interval()
            .context("Invalid tick configuration")?;

        Ok(Self {
            world,
            placement: config.placement,
            tick_interval,
            seed,
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!(
            width = self.world.width(),
            height = self.world.height(),
            screen = ?self.world.screen_size(),
            start_pixel = ?cell_to_pixel(&self.world, self.world.center()),
            seed = ?self.seed,
            "starting human mode"
        );

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let engine = GameEngine::new(self.world, self.placement, self.rng());
        let mut game = GameLoop::new(
            engine,
            KeyboardInput::new(),
            TerminalRenderer::new(terminal),
            IntervalClock::new(self.tick_interval),
        );

        // Run game loop with cleanup
        let result = tokio::select! {
            result = game.run() => result,
            // Handle Ctrl+C
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                Ok(())
            }
        };

        // Cleanup terminal
        Self::cleanup_terminal(game.renderer_mut().terminal_mut())?;

        result
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_grid() {
        assert!(HumanMode::new(&GameConfig::new(0, 10), None).is_err());

        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(HumanMode::new(&config, None).is_err());

        let config = GameConfig {
            cell_size: 300_000_000,
            ..Default::default()
        };
        assert!(HumanMode::new(&config, None).is_err());
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        use rand::Rng;

        let mode = HumanMode::new(&GameConfig::default(), Some(17)).unwrap();
        let a: u64 = mode.rng().gen_range(0..u64::MAX);
        let b: u64 = mode.rng().gen_range(0..u64::MAX);
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_paces_ticks() {
        let mut clock = IntervalClock::new(Duration::from_millis(50));
        let start = tokio::time::Instant::now();

        // The first tick completes immediately.
        clock.tick().await;
        clock.tick().await;
        clock.tick().await;

        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }
}
