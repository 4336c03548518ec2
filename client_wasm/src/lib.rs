//! Browser client for Pong
//!
//! Canvas 2D rendering, keyboard/click input and the animation frame loop
//! around `game_core`.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod theme;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Set up the game on `<canvas id={canvas_id}>` and show the start screen.
/// The first click on the canvas starts play.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    app::start(canvas_id).map_err(|err| {
        web_sys::console::error_1(&err);
        err
    })
}
