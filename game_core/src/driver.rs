use crate::{draw_frame, Canvas, Events, FixedStep, Game, PointerInput};

/// Run state of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Drives update -> render once per host refresh
///
/// The host calls [`FrameDriver::frame`] from its refresh callback and keeps
/// rescheduling while [`FrameDriver::is_running`] holds.
pub struct FrameDriver {
    game: Game,
    clock: FixedStep,
    pointer: PointerInput,
    state: LoopState,
}

impl FrameDriver {
    pub fn new(game: Game) -> Self {
        Self::with_clock(game, FixedStep::default())
    }

    pub fn with_clock(game: Game, clock: FixedStep) -> Self {
        Self {
            game,
            clock,
            pointer: PointerInput::new(),
            state: LoopState::Idle,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Input cell the pointer listener writes into
    pub fn pointer(&self) -> &PointerInput {
        &self.pointer
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.clock.reset();
        self.state = LoopState::Running;
        log::debug!("frame loop started");
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = LoopState::Stopped;
        log::debug!("frame loop stopped after {} ticks", self.game.ticks);
    }

    /// Run the ticks owed at `now_ms` and draw once; returns ticks run
    pub fn frame(&mut self, now_ms: f64, canvas: &mut impl Canvas) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let ticks = self.clock.advance(now_ms);
        for _ in 0..ticks {
            let events = self.game.tick(self.pointer.sample());
            if events.any_score() {
                log_score(&events, &self.game);
            }
        }

        draw_frame(&self.game.snapshot(), &self.game.config, canvas);
        ticks
    }
}

fn log_score(events: &Events, game: &Game) {
    let scorer = if events.player_scored { "player" } else { "ai" };
    log::info!(
        "{} scored: player {} - ai {}",
        scorer,
        game.score.player,
        game.score.ai
    );
}
