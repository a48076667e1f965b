use crate::{Config, GameRng};
use glam::Vec2;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // Left, follows the pointer
    Ai,     // Right, follows the ball
}

/// Paddle component - represents one side's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to court)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left of the bounding box
    pub vel: Vec2, // Displacement per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    /// Overlaps the paddle rectangle whose left edge is `paddle_x`
    pub fn overlaps(&self, paddle_x: f32, paddle_y: f32, config: &Config) -> bool {
        self.pos.x < paddle_x + config.paddle_width
            && self.pos.x + config.ball_size > paddle_x
            && self.pos.y < paddle_y + config.paddle_height
            && self.pos.y + config.ball_size > paddle_y
    }

    /// Respawn at court center heading left or right at base speed
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = config.ball_spawn();

        let speed = config.ball_speed;
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed * dir, rng.0.gen_range(-speed..=speed));
    }
}
