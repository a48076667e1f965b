//! Court drawing against an abstract 2D surface
//!
//! The browser client implements [`Canvas`] for `CanvasRenderingContext2d`;
//! tests use a recorder.

use crate::{Config, Side, Snapshot};

pub const FOREGROUND: &str = "#fff";
pub const SCORE_FONT: &str = "32px Arial";
pub const SCORE_BASELINE: f64 = 40.0;
pub const CENTER_DASH: [f64; 2] = [10.0, 10.0];

/// Draw primitives the render step needs from a host surface
pub trait Canvas {
    fn clear(&mut self, width: f64, height: f64);
    fn set_color(&mut self, css: &str);
    fn set_font(&mut self, css: &str);
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: &[f64]);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Draw one frame of the court
pub fn draw_frame(snapshot: &Snapshot, config: &Config, canvas: &mut impl Canvas) {
    let width = config.court_width as f64;
    let height = config.court_height as f64;

    canvas.clear(width, height);
    canvas.set_color(FOREGROUND);

    // Center line
    canvas.dashed_line((width / 2.0, 0.0), (width / 2.0, height), &CENTER_DASH);

    // Paddles
    let paddle_w = config.paddle_width as f64;
    let paddle_h = config.paddle_height as f64;
    for (side, y) in [
        (Side::Player, snapshot.player_paddle_y),
        (Side::Ai, snapshot.ai_paddle_y),
    ] {
        canvas.fill_rect(config.paddle_x(side) as f64, y as f64, paddle_w, paddle_h);
    }

    // Ball
    let radius = config.ball_size as f64 / 2.0;
    canvas.fill_circle(
        snapshot.ball_pos.x as f64 + radius,
        snapshot.ball_pos.y as f64 + radius,
        radius,
    );

    // Score
    canvas.set_font(SCORE_FONT);
    canvas.fill_text(&snapshot.score.player.to_string(), width / 4.0, SCORE_BASELINE);
    canvas.fill_text(&snapshot.score.ai.to_string(), 3.0 * width / 4.0, SCORE_BASELINE);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Score;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Clear(f64, f64),
        Color(String),
        Font(String),
        Dashed((f64, f64), (f64, f64), Vec<f64>),
        Rect(f64, f64, f64, f64),
        Circle(f64, f64, f64),
        Text(String, f64, f64),
    }

    /// Canvas that records every draw call
    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, width: f64, height: f64) {
            self.calls.push(Call::Clear(width, height));
        }
        fn set_color(&mut self, css: &str) {
            self.calls.push(Call::Color(css.to_string()));
        }
        fn set_font(&mut self, css: &str) {
            self.calls.push(Call::Font(css.to_string()));
        }
        fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: &[f64]) {
            self.calls.push(Call::Dashed(from, to, dash.to_vec()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(Call::Rect(x, y, width, height));
        }
        fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
            self.calls.push(Call::Circle(cx, cy, radius));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(Call::Text(text.to_string(), x, y));
        }
    }

    #[test]
    fn test_draw_frame_layout() {
        let config = Config::new();
        let snapshot = Snapshot {
            player_paddle_y: 200.0,
            ai_paddle_y: 10.0,
            ball_pos: Vec2::new(392.0, 242.0),
            ball_vel: Vec2::new(5.0, 0.0),
            score: Score { player: 3, ai: 7 },
        };
        let mut canvas = Recorder::default();

        draw_frame(&snapshot, &config, &mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                Call::Clear(800.0, 500.0),
                Call::Color("#fff".to_string()),
                Call::Dashed((400.0, 0.0), (400.0, 500.0), vec![10.0, 10.0]),
                Call::Rect(20.0, 200.0, 12.0, 80.0),
                Call::Rect(768.0, 10.0, 12.0, 80.0),
                Call::Circle(400.0, 250.0, 8.0),
                Call::Font("32px Arial".to_string()),
                Call::Text("3".to_string(), 200.0, 40.0),
                Call::Text("7".to_string(), 600.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_clear_comes_first() {
        let game = crate::Game::new(Config::new(), 5);
        let mut canvas = Recorder::default();

        draw_frame(&game.snapshot(), &game.config, &mut canvas);

        assert!(matches!(canvas.calls.first(), Some(Call::Clear(..))));
    }
}
