use crate::{Config, Paddle, Side};
use hecs::World;

/// Translate a viewport pointer Y into court-local Y
pub fn court_y_from_client(client_y: f64, surface_top: f64) -> f32 {
    (client_y - surface_top) as f32
}

/// Paddle top Y that centres the player paddle on the pointer
pub fn paddle_target_y(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Move the player paddle to the latest pointer sample, if any
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: Option<f32>) {
    let Some(pointer_y) = pointer_y else {
        return;
    };

    let target = paddle_target_y(pointer_y, config);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = target;
        }
    }
}
