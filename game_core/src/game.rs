use crate::{create_ball, create_paddle, step, Ball, Config, Events, GameRng, Paddle, Score, Side};
use glam::Vec2;
use hecs::World;

/// Plain copy of everything the renderer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player_paddle_y: f32,
    pub ai_paddle_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub score: Score,
}

/// A single-player match: the ECS world plus its resources
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub ticks: u64,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let paddle_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Player, paddle_y);
        create_paddle(&mut world, Side::Ai, paddle_y);

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            ticks: 0,
        }
    }

    /// Run one simulation tick and return what happened during it
    pub fn tick(&mut self, pointer_y: Option<f32>) -> Events {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            pointer_y,
        );
        self.ticks += 1;
        self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        let (ball_pos, ball_vel) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
            .unwrap_or((self.config.ball_spawn(), Vec2::ZERO));

        let mut player_paddle_y = self.config.paddle_spawn_y();
        let mut ai_paddle_y = self.config.paddle_spawn_y();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player_paddle_y = paddle.y,
                Side::Ai => ai_paddle_y = paddle.y,
            }
        }

        Snapshot {
            player_paddle_y,
            ai_paddle_y,
            ball_pos,
            ball_vel,
            score: self.score,
        }
    }

    /// Place the ball directly, bypassing physics
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Place a paddle directly, clamped to the court
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}
