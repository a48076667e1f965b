use std::cell::Cell;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32, // Left, pointer-controlled
    pub ai: u32,     // Right, computer-controlled
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.ai_scored
    }
}

/// Latest pointer sample, in court-local Y
///
/// Writers overwrite (last writer wins); the simulation reads it once at the
/// start of each tick. Holds the last sample until a new one arrives.
#[derive(Debug, Default)]
pub struct PointerInput {
    latest: Cell<Option<f32>>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, y: f32) {
        self.latest.set(Some(y));
    }

    pub fn sample(&self) -> Option<f32> {
        self.latest.get()
    }
}
