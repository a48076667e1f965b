//! Canvas client for single-player Pong
//!
//! Looks up the court canvas, wires pointer input, and drives
//! `game_core::FrameDriver` from `requestAnimationFrame`.
//! Only compiled for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod input;

use canvas::Surface2d;
use error::ClientError;
use game_core::{Config, FrameDriver, Game};
use input::{listen_pointer, unlisten_pointer, PointerListener};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {err}")));
    }
}

/// Running game; dropping it from JS does not stop the loop, call `stop()`
#[wasm_bindgen]
pub struct GameHandle {
    window: Window,
    canvas: HtmlCanvasElement,
    driver: Rc<RefCell<FrameDriver>>,
    frame_cb: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    pointer: Option<PointerListener>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Stop simulating, cancel the pending frame and detach the pointer
    pub fn stop(&mut self) {
        self.driver.borrow_mut().stop();

        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel animation frame: {:?}", err);
            }
        }
        // Breaks the callback's self-reference so it can be freed
        self.frame_cb.borrow_mut().take();

        if let Some(listener) = self.pointer.take() {
            unlisten_pointer(&self.canvas, &listener);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.driver.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn player_score(&self) -> u32 {
        self.driver.borrow().game().score.player
    }

    #[wasm_bindgen(getter)]
    pub fn ai_score(&self) -> u32 {
        self.driver.borrow().game().score.ai
    }
}

/// Start a game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<GameHandle, JsValue> {
    start_game(canvas_id).map_err(JsValue::from)
}

fn start_game(canvas_id: &str) -> Result<GameHandle, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let canvas = find_canvas(&window, canvas_id)?;
    let ctx = context_2d(&canvas)?;

    // The court is the canvas
    let config = Config::for_court(canvas.width() as f32, canvas.height() as f32)?;
    let seed = js_sys::Date::now() as u64;
    log::info!(
        "starting pong on #{} ({}x{})",
        canvas_id,
        config.court_width,
        config.court_height
    );

    let driver = Rc::new(RefCell::new(FrameDriver::new(Game::new(config, seed))));
    let pointer = listen_pointer(&canvas, driver.clone())?;

    driver.borrow_mut().start();
    let frame_id = Rc::new(Cell::new(None));
    let frame_cb = start_loop(&window, driver.clone(), Surface2d::new(ctx), frame_id.clone())?;

    Ok(GameHandle {
        window,
        canvas,
        driver,
        frame_cb,
        frame_id,
        pointer: Some(pointer),
    })
}

fn find_canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement, ClientError> {
    let doc = window.document().ok_or(ClientError::NoDocument)?;
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::CanvasNotFound(id.to_string()))?;
    el.dyn_into()
        .map_err(|_| ClientError::NotACanvas(id.to_string()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ClientError> {
    canvas
        .get_context("2d")
        .map_err(ClientError::js)?
        .ok_or(ClientError::NoContext)?
        .dyn_into()
        .map_err(|_| ClientError::NoContext)
}

fn request_frame(window: &Window, cb: &FrameCallback) -> Option<i32> {
    let cb = cb.borrow();
    let cb = cb.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::error!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

/// Schedule `driver.frame` on every refresh until the driver stops
fn start_loop(
    window: &Window,
    driver: Rc<RefCell<FrameDriver>>,
    mut surface: Surface2d,
    frame_id: Rc<Cell<Option<i32>>>,
) -> Result<FrameCallback, ClientError> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let w = window.clone();
    let id = frame_id.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let running = {
            let mut driver = driver.borrow_mut();
            driver.frame(ts, &mut surface);
            driver.is_running()
        };
        let next = if running { request_frame(&w, &f) } else { None };
        id.set(next);
    }) as Box<dyn FnMut(f64)>));

    let first = request_frame(window, &g)
        .ok_or_else(|| ClientError::Js("requestAnimationFrame failed".to_string()))?;
    frame_id.set(Some(first));
    Ok(g)
}
