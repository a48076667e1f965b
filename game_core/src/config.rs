use crate::components::Side;
use crate::params::Params;
use glam::Vec2;
use thiserror::Error;

/// Reasons a court/tuning combination cannot be played
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("court {width}x{height} cannot fit two paddles and the ball")]
    CourtTooNarrow { width: f32, height: f32 },
    #[error("court height {height} is shorter than the paddle ({paddle_height})")]
    PaddleTooTall { height: f32, paddle_height: f32 },
    #[error("court height {height} is shorter than the ball ({ball_size})")]
    BallTooLarge { height: f32, ball_size: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositiveSpeed { name: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub spin_factor: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            spin_factor: Params::SPIN_FACTOR,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a court matching the render surface size
    pub fn for_court(width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            court_width: width,
            court_height: height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.court_height < self.paddle_height {
            return Err(ConfigError::PaddleTooTall {
                height: self.court_height,
                paddle_height: self.paddle_height,
            });
        }
        if self.court_height < self.ball_size {
            return Err(ConfigError::BallTooLarge {
                height: self.court_height,
                ball_size: self.ball_size,
            });
        }
        let needed = 2.0 * (self.paddle_inset + self.paddle_width) + self.ball_size;
        if self.court_width < needed {
            return Err(ConfigError::CourtTooNarrow {
                width: self.court_width,
                height: self.court_height,
            });
        }
        for (name, value) in [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveSpeed { name, value });
            }
        }
        Ok(())
    }

    /// Left edge X of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Ai => self.court_width - self.paddle_width - self.paddle_inset,
        }
    }

    /// Largest top-left Y a paddle may take
    pub fn max_paddle_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Clamp paddle top Y to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle top Y that centres it vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    /// Top-left of the ball when centred in the court
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.court_width - self.ball_size) / 2.0,
            (self.court_height - self.ball_size) / 2.0,
        )
    }

    /// Per-tick AI paddle displacement
    pub fn ai_speed(&self) -> f32 {
        self.paddle_speed * self.ai_speed_factor
    }
}
