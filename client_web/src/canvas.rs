//! `game_core::Canvas` over the browser's 2D context

use game_core::Canvas;
use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

fn warn_on_err(call: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{} failed: {:?}", call, err);
    }
}

pub struct Surface2d {
    ctx: CanvasRenderingContext2d,
}

impl Surface2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas for Surface2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_color(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
        self.ctx.set_stroke_style_str(css);
    }

    fn set_font(&mut self, css: &str) {
        self.ctx.set_font(css);
    }

    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: &[f64]) {
        let segments: Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        warn_on_err("setLineDash", self.ctx.set_line_dash(&segments));
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
        warn_on_err("setLineDash", self.ctx.set_line_dash(&Array::new()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.ctx.begin_path();
        warn_on_err("arc", self.ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU));
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        warn_on_err("fillText", self.ctx.fill_text(text, x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlCanvasElement;

    fn surface() -> Surface2d {
        let doc = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
        let ctx = canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap();
        Surface2d::new(ctx)
    }

    #[wasm_bindgen_test]
    fn test_dashed_line_restores_solid_stroke() {
        let mut s = surface();
        s.dashed_line((400.0, 0.0), (400.0, 500.0), &[10.0, 10.0]);

        assert_eq!(s.ctx.get_line_dash().length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_set_color_sets_fill_and_stroke() {
        let mut s = surface();
        s.set_color("#fff");

        assert_eq!(s.ctx.fill_style().as_string().as_deref(), Some("#ffffff"));
        assert_eq!(s.ctx.stroke_style().as_string().as_deref(), Some("#ffffff"));
    }

    #[wasm_bindgen_test]
    fn test_negative_radius_does_not_panic() {
        // arc() throws IndexSizeError; the draw call only logs it
        let mut s = surface();
        s.fill_circle(10.0, 10.0, -1.0);
    }
}
