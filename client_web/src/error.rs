//! Startup failures surfaced to JavaScript

use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("canvas cannot host the court: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    pub fn js(err: JsValue) -> Self {
        Self::Js(format!("{:?}", err))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
