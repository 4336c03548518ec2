//! Browser-backed host: console logging and `setTimeout` for deferred effects

use game_core::{Deferred, Host};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::app::with_app;

pub struct BrowserHost;

impl Host for BrowserHost {
    fn log(&self, msg: String) {
        console::log_1(&msg.into());
    }

    fn schedule_after(&self, delay_ms: u32, effect: Deferred) {
        let callback = Closure::once_into_js(move || {
            with_app(|app| app.game.apply(effect));
        });

        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no global window"))
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    delay_ms as i32,
                )
            });
        if let Err(err) = scheduled {
            console::error_1(&err);
        }
    }
}
