//! Page wiring: canvas setup, input listeners and the animation frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window,
};

use crate::canvas::CanvasSurface;
use crate::host::BrowserHost;
use crate::input::{get_key_from_event, handle_key_down, handle_key_up, is_paddle_key};
use crate::theme::load_theme;

pub struct App {
    pub game: Game,
    pub surface: CanvasSurface,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the running app, if it has been started
pub fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Build the game on the canvas with id `canvas_id` and draw the start screen
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

    let config = Config::new();
    canvas.set_width(config.arena_width as u32);
    canvas.set_height(config.arena_height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))?;

    let theme = load_theme(&window, &document);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
    console::log_1(
        &format!(
            "pong: canvas {}x{}, seed {}",
            canvas.width(),
            canvas.height(),
            seed
        )
        .into(),
    );

    let mut app = App {
        game: Game::new(config, theme, seed),
        surface: CanvasSurface::new(ctx),
    };
    app.game.draw(&mut app.surface);
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    setup_event_listeners(&window, &canvas)
}

fn setup_event_listeners(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        if is_paddle_key(&key) {
            event.prevent_default();
        }
        with_app(|app| handle_key_down(&mut app.game.input, &key));
    });
    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        with_app(|app| handle_key_up(&mut app.game.input, &key));
    });
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(|_event: MouseEvent| {
        let started = with_app(|app| app.game.activate(&BrowserHost)).unwrap_or(false);
        if started {
            if let Err(err) = start_loop() {
                console::error_1(&err);
            }
        }
    });
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &FrameCallback) -> Result<(), JsValue> {
    match callback.borrow().as_ref() {
        Some(cb) => window()?
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map(|_| ()),
        None => Err(JsValue::from_str("frame callback missing")),
    }
}

/// Drive `Game::frame` from `requestAnimationFrame` for as long as it asks
fn start_loop() -> Result<(), JsValue> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        let again = with_app(|app| app.game.frame(&BrowserHost, &mut app.surface)).unwrap_or(false);
        if again {
            if let Err(err) = request_frame(&f) {
                console::error_1(&err);
            }
        }
    }));

    request_frame(&g)
}
