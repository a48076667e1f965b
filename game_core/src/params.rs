/// Game tuning parameters for Pong
///
/// Distances are in canvas pixels, speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (overridden by the real canvas size at startup)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between paddle and its court edge
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const SPIN_FACTOR: f32 = 0.25; // Impact offset -> vertical velocity

    // AI
    pub const AI_SPEED_FACTOR: f32 = 0.85; // Fraction of paddle speed
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Loop
    pub const TICK_RATE: f64 = 60.0; // Ticks per second
    pub const MAX_FRAME_MS: f64 = 100.0; // Clamp to prevent large catch-up bursts
}
