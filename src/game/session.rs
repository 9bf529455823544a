use anyhow::Result;
use rand::Rng;
use tracing::info;

use super::engine::GameEngine;
use super::io::{Clock, InputEvent, InputSource, RenderSink};
use crate::metrics::SessionStats;

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Quit,
}

/// Drives the engine with injected input, render and clock collaborators
pub struct GameLoop<R, I, D, C> {
    engine: GameEngine<R>,
    input: I,
    renderer: D,
    clock: C,
    stats: SessionStats,
}

impl<R, I, D, C> GameLoop<R, I, D, C>
where
    R: Rng,
    I: InputSource,
    D: RenderSink,
    C: Clock,
{
    pub fn new(engine: GameEngine<R>, input: I, renderer: D, clock: C) -> Self {
        Self {
            engine,
            input,
            renderer,
            clock,
            stats: SessionStats::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut D {
        &mut self.renderer
    }

    /// Run one tick: drain input, advance, hand the result to the renderer
    pub fn tick(&mut self) -> Result<TickControl> {
        let mut requests = Vec::new();
        for event in self.input.drain()? {
            match event {
                InputEvent::Turn(direction) => requests.push(direction),
                InputEvent::Quit => return Ok(TickControl::Quit),
            }
        }

        let info = self.engine.step(requests);
        self.stats.record(info, self.engine.snake().len());

        self.renderer.render(&self.engine.frame())?;
        Ok(TickControl::Continue)
    }

    /// Tick at the clock's pace until the player quits
    pub async fn run(&mut self) -> Result<()> {
        info!(
            width = self.engine.world().width(),
            height = self.engine.world().height(),
            "session started"
        );
        self.renderer.render(&self.engine.frame())?;

        loop {
            self.clock.tick().await;
            if self.tick()? == TickControl::Quit {
                break;
            }
        }

        info!(
            ticks = self.stats.ticks,
            apples = self.stats.apples_eaten,
            resets = self.stats.resets,
            longest = self.stats.longest_snake,
            "session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Apple, Cell, Direction, GridWorld, Placement, RenderFrame, Snake};
    use async_trait::async_trait;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::VecDeque;

    /// Plays back one batch of events per tick, then asks to quit
    struct ScriptedInput(VecDeque<Vec<InputEvent>>);

    impl InputSource for ScriptedInput {
        fn drain(&mut self) -> Result<Vec<InputEvent>> {
            Ok(self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(Vec<Cell>, Cell, Option<Cell>)>,
    }

    impl RenderSink for RecordingRenderer {
        fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
            self.frames.push((
                frame.segments.iter().copied().collect(),
                frame.apple,
                frame.erased_tail,
            ));
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingClock(usize);

    #[async_trait]
    impl Clock for CountingClock {
        async fn tick(&mut self) {
            self.0 += 1;
        }
    }

    struct FailingRenderer;

    impl RenderSink for FailingRenderer {
        fn render(&mut self, _frame: &RenderFrame<'_>) -> Result<()> {
            anyhow::bail!("terminal went away")
        }
    }

    fn engine(apple: Cell) -> GameEngine<StdRng> {
        let world = GridWorld::new(32, 24, 20).unwrap();
        GameEngine::with_state(
            world,
            Snake::new(world),
            Apple::at(world, Placement::Anywhere, apple),
            StdRng::seed_from_u64(8),
        )
    }

    fn script(batches: Vec<Vec<InputEvent>>) -> ScriptedInput {
        ScriptedInput(batches.into())
    }

    #[test]
    fn test_tick_eats_and_grows() {
        let mut game = GameLoop::new(
            engine(Cell::new(17, 12)),
            script(vec![vec![], vec![]]),
            RecordingRenderer::default(),
            CountingClock::default(),
        );

        assert_eq!(game.tick().unwrap(), TickControl::Continue);
        assert_eq!(game.engine().snake().target_length(), 2);
        assert_eq!(game.stats().apples_eaten, 1);

        assert_eq!(game.tick().unwrap(), TickControl::Continue);
        let frames = &game.renderer().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].0, vec![Cell::new(18, 12), Cell::new(17, 12)]);
        assert_eq!(frames[1].2, None);
    }

    #[test]
    fn test_quit_stops_before_moving() {
        let mut game = GameLoop::new(
            engine(Cell::new(0, 0)),
            script(vec![vec![InputEvent::Turn(Direction::Up), InputEvent::Quit]]),
            RecordingRenderer::default(),
            CountingClock::default(),
        );

        assert_eq!(game.tick().unwrap(), TickControl::Quit);
        assert_eq!(game.engine().snake().head(), Cell::new(16, 12));
        assert_eq!(game.engine().snake().direction(), Direction::Right);
        assert!(game.renderer().frames.is_empty());
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut game = GameLoop::new(
            engine(Cell::new(0, 0)),
            script(vec![
                vec![],
                vec![InputEvent::Turn(Direction::Down)],
                vec![InputEvent::Turn(Direction::Up)],
            ]),
            RecordingRenderer::default(),
            CountingClock::default(),
        );

        game.run().await.unwrap();

        // Initial frame plus three ticks; the fourth tick saw the quit.
        assert_eq!(game.clock.0, 4);
        assert_eq!(game.stats().ticks, 3);
        assert_eq!(game.renderer().frames.len(), 4);
        assert_eq!(game.engine().snake().head(), Cell::new(17, 14));
        assert_eq!(game.engine().snake().direction(), Direction::Down);
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let mut game = GameLoop::new(
            engine(Cell::new(0, 0)),
            script(vec![]),
            FailingRenderer,
            CountingClock::default(),
        );

        let err = game.run().await.unwrap_err();
        assert!(err.to_string().contains("terminal went away"));
    }
}
