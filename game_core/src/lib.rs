pub mod components;
pub mod config;
pub mod driver;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod timestep;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use timestep::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed tick
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    pointer_y: Option<f32>,
) {
    // Clear events at start of tick
    events.clear();

    // 0. Latest pointer sample drives the player paddle
    apply_pointer(world, config, pointer_y);

    // 1. Move ball
    move_ball(world);

    // 2. Bounce off top/bottom walls
    check_walls(world, config, events);

    // 3. Paddle hits (player first, then AI)
    check_paddles(world, config, events);

    // 4. Check scoring (ball left the court)
    check_scoring(world, config, score, events, rng);

    // 5. AI paddle follows the ball
    move_ai(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
