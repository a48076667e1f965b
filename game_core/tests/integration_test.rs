use game_core::*;
use glam::Vec2;

fn new_game(seed: u64) -> Game {
    Game::new(Config::new(), seed)
}

#[test]
fn test_player_return_with_spin() {
    let mut game = new_game(1);
    // Keep the AI paddle out of the way
    game.set_paddle_y(Side::Ai, 0.0);
    // Ball reaches the paddle's right face (x=32) after one tick
    game.set_ball(Vec2::new(35.0, 200.0), Vec2::new(-5.0, 0.0));

    // Pointer at 240 puts the paddle top at 200 (centre 240)
    let events = game.tick(Some(240.0));

    let snap = game.snapshot();
    assert!(events.ball_hit_paddle);
    assert_eq!(snap.player_paddle_y, 200.0);
    assert!(snap.ball_vel.x > 0.0, "Ball should head back right");
    assert_eq!(snap.ball_vel.y, -8.0);
    assert_eq!(snap.ball_pos.x, 32.0);
}

#[test]
fn test_unreturned_ball_scores_for_player() {
    let mut game = new_game(2);
    game.set_paddle_y(Side::Ai, 0.0);
    game.set_ball(Vec2::new(800.0, 300.0), Vec2::new(5.0, 0.0));

    let events = game.tick(None);

    let snap = game.snapshot();
    assert!(events.player_scored);
    assert!(!events.ai_scored);
    assert_eq!(snap.score, Score { player: 1, ai: 0 });
    assert_eq!(snap.ball_pos, game.config.ball_spawn());
}

#[test]
fn test_missed_ball_scores_for_ai() {
    let mut game = new_game(3);
    game.set_ball(Vec2::new(2.0, 20.0), Vec2::new(-5.0, 0.0));

    // Player paddle at the bottom, far from the ball
    let events = game.tick(Some(10_000.0));

    assert!(events.ai_scored);
    assert_eq!(game.score, Score { player: 0, ai: 1 });
    assert_eq!(game.snapshot().ball_pos, game.config.ball_spawn());
}

#[test]
fn test_ai_paddle_chases_ball() {
    let mut game = new_game(4);
    // AI paddle centre 190, ball centre 240 after moving horizontally
    game.set_paddle_y(Side::Ai, 150.0);
    game.set_ball(Vec2::new(400.0, 232.0), Vec2::new(5.0, 0.0));

    game.tick(None);

    let expected = 150.0 + Params::PADDLE_SPEED * 0.85;
    assert!((game.snapshot().ai_paddle_y - expected).abs() < 1e-4);
}

#[test]
fn test_wall_bounce_inside_full_tick() {
    let mut game = new_game(5);
    game.set_ball(Vec2::new(400.0, 2.0), Vec2::new(5.0, -4.0));

    let events = game.tick(None);

    let snap = game.snapshot();
    assert!(events.ball_hit_wall);
    assert_eq!(snap.ball_pos.y, 0.0);
    assert_eq!(snap.ball_vel.y, 4.0);
}

#[test]
fn test_invariants_hold_over_long_match() {
    let mut game = new_game(2024);
    let config = game.config.clone();
    let floor = config.court_height - config.ball_size;

    for i in 0..20_000u32 {
        // Sweep the pointer past both edges of the court
        let pointer = ((i * 7) % 700) as f32 - 100.0;
        let before = game.score;
        let events = game.tick(Some(pointer));
        let snap = game.snapshot();

        for y in [snap.player_paddle_y, snap.ai_paddle_y] {
            assert!((0.0..=config.max_paddle_y()).contains(&y), "paddle y {y}");
        }
        assert!((0.0..=floor).contains(&snap.ball_pos.y), "ball y {}", snap.ball_pos.y);
        assert!(snap.ball_vel.x != 0.0, "Ball never stalls horizontally");

        let gained = (snap.score.player - before.player) + (snap.score.ai - before.ai);
        if events.any_score() {
            assert_eq!(gained, 1, "Exactly one point per scoring tick");
            assert_eq!(snap.ball_pos, config.ball_spawn());
            assert_eq!(snap.ball_vel.x.abs(), config.ball_speed);
            assert!(snap.ball_vel.y.abs() <= config.ball_speed);
        } else {
            assert_eq!(gained, 0);
        }
    }

    assert!(game.score.player + game.score.ai > 0, "Someone should score");
}

#[test]
fn test_driver_runs_the_game() {
    let mut driver = FrameDriver::new(new_game(6));
    let mut canvas = NullCanvas::default();
    driver.start();

    let mut now = 0.0;
    let mut ticks = 0;
    for _ in 0..600 {
        ticks += driver.frame(now, &mut canvas);
        now += 1000.0 / 60.0;
    }
    driver.stop();

    assert!((590..=600).contains(&ticks), "got {ticks}");
    assert_eq!(driver.game().ticks, ticks as u64);
    assert_eq!(canvas.frames, 600);
    assert_eq!(driver.frame(now, &mut canvas), 0);
}

#[derive(Default)]
struct NullCanvas {
    frames: u32,
}

impl Canvas for NullCanvas {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.frames += 1;
    }
    fn set_color(&mut self, _css: &str) {}
    fn set_font(&mut self, _css: &str) {}
    fn dashed_line(&mut self, _from: (f64, f64), _to: (f64, f64), _dash: &[f64]) {}
    fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}
    fn fill_circle(&mut self, _cx: f64, _cy: f64, _radius: f64) {}
    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) {}
}
