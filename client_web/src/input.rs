//! Pointer wiring: `mousemove` on the canvas feeds the driver's input cell

use crate::error::ClientError;
use game_core::systems::court_y_from_client;
use game_core::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

pub type PointerListener = Closure<dyn FnMut(MouseEvent)>;

const EVENT: &str = "mousemove";

/// Register the listener; the returned closure must outlive the registration
pub fn listen_pointer(
    canvas: &HtmlCanvasElement,
    driver: Rc<RefCell<FrameDriver>>,
) -> Result<PointerListener, ClientError> {
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let y = court_y_from_client(evt.client_y() as f64, rect.top());
        if let Ok(driver) = driver.try_borrow() {
            driver.pointer().set(y);
        }
    }) as Box<dyn FnMut(_)>);

    canvas
        .add_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
        .map_err(ClientError::js)?;
    Ok(closure)
}

pub fn unlisten_pointer(canvas: &HtmlCanvasElement, listener: &PointerListener) {
    if let Err(err) =
        canvas.remove_event_listener_with_callback(EVENT, listener.as_ref().unchecked_ref())
    {
        log::warn!("failed to remove pointer listener: {:?}", err);
    }
}
