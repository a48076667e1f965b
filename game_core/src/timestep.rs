use crate::Params;

/// How host frames map to simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Ticks owed by elapsed time at the fixed tick rate
    Accumulate,
    /// Exactly one tick per host frame; speed follows the refresh rate
    PerFrame,
}

/// Fixed-timestep accumulator
///
/// Converts host frame timestamps (ms) into a whole number of simulation
/// ticks, carrying leftover time between frames.
#[derive(Debug, Clone)]
pub struct FixedStep {
    mode: StepMode,
    tick_ms: f64,
    max_frame_ms: f64,
    accumulator: f64,
    last: Option<f64>,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(Params::TICK_RATE, Params::MAX_FRAME_MS)
    }
}

impl FixedStep {
    pub fn new(tick_rate: f64, max_frame_ms: f64) -> Self {
        Self {
            mode: StepMode::Accumulate,
            tick_ms: 1000.0 / tick_rate,
            max_frame_ms,
            accumulator: 0.0,
            last: None,
        }
    }

    /// One tick per frame regardless of timestamps
    pub fn per_frame() -> Self {
        Self {
            mode: StepMode::PerFrame,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Number of ticks owed at `now_ms`
    ///
    /// The first frame always owes exactly one tick. Later frames are
    /// clamped to `max_frame_ms` so a stalled tab does not burst-simulate.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if self.mode == StepMode::PerFrame {
            self.last = Some(now_ms);
            return 1;
        }

        let Some(last) = self.last.replace(now_ms) else {
            return 1;
        };

        let frame_ms = (now_ms - last).clamp(0.0, self.max_frame_ms);
        self.accumulator += frame_ms;

        let mut ticks = 0;
        while self.accumulator >= self.tick_ms {
            self.accumulator -= self.tick_ms;
            ticks += 1;
        }
        ticks
    }

    /// Forget the last timestamp (e.g. after the loop was paused)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last = None;
    }
}
