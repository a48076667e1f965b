use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Direction the AI paddle should move this tick
///
/// Returns 1 (down), -1 (up) or 0 when the ball centre is inside the dead zone.
pub fn ai_direction(paddle_center: f32, ball_center: f32, dead_zone: f32) -> i8 {
    if paddle_center < ball_center - dead_zone {
        1
    } else if paddle_center > ball_center + dead_zone {
        -1
    } else {
        0
    }
}

/// Track the ball with the AI paddle
pub fn move_ai(world: &mut World, config: &Config) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center_y(config));
    let Some(ball_center) = ball_center else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let dir = ai_direction(paddle.center_y(config), ball_center, config.ai_dead_zone);
        paddle.y = config.clamp_paddle_y(paddle.y + dir as f32 * config.ai_speed());
    }
}
