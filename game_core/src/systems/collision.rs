use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let floor = config.court_height - config.ball_size;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
        } else if ball.pos.y >= floor {
            ball.pos.y = floor;
        } else {
            continue;
        }
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
        log::trace!("wall bounce at x={:.1}", ball.pos.x);
    }
}

/// Check ball collisions with both paddles
///
/// The player paddle is resolved before the AI paddle, so when the ball
/// overlaps both, the AI paddle's correction is the one that sticks.
pub fn check_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let paddle_x = config.paddle_x(side);
            if !ball.overlaps(paddle_x, paddle_y, config) {
                continue;
            }

            // Sit flush against the paddle's facing edge
            ball.pos.x = match side {
                Side::Player => paddle_x + config.paddle_width,
                Side::Ai => paddle_x - config.ball_size,
            };
            ball.vel.x = -ball.vel.x;

            // Spin replaces the previous vertical velocity
            let paddle_center = paddle_y + config.paddle_height / 2.0;
            let impact = ball.center_y(config) - paddle_center;
            ball.vel.y = impact * config.spin_factor;

            events.ball_hit_paddle = true;
            log::trace!("{:?} paddle hit, impact offset {:.1}", side, impact);
        }
    }
}
