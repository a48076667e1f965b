use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if ball left the court (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            // Past the player's edge
            score.increment_ai();
            events.ai_scored = true;
        } else if ball.pos.x + config.ball_size > config.court_width {
            // Past the AI's edge
            score.increment_player();
            events.player_scored = true;
        } else {
            continue;
        }

        ball.reset(config, rng);
    }
}
