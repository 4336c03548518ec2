//! Canvas 2D implementation of the game's drawing surface

use game_core::{Fill, Stroke, Surface, TextStyle};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn apply_fill(&self, fill: &Fill) {
        self.ctx.set_fill_style_str(&fill.color);
        match &fill.shadow {
            Some(shadow) => {
                self.ctx.set_shadow_color(&shadow.color);
                self.ctx.set_shadow_blur(shadow.blur as f64);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

// Drawing is cosmetic; a failed call is reported and the frame goes on.
fn warn_on_err(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::warn_1(&err);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        self.apply_fill(fill);
        self.ctx.begin_path();
        warn_on_err(
            self.ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
        );
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: &Fill) {
        self.apply_fill(fill);
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let dash: js_sys::Array = stroke
            .dash
            .iter()
            .map(|d| JsValue::from_f64(*d as f64))
            .collect();
        warn_on_err(self.ctx.set_line_dash(&dash));
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_stroke_style_str(&stroke.color);
        self.ctx.set_line_width(stroke.width as f64);

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();

        warn_on_err(self.ctx.set_line_dash(&js_sys::Array::new()));
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.apply_fill(&style.fill);
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(style.align.as_css());
        warn_on_err(self.ctx.fill_text(text, at.x as f64, at.y as f64));
        self.ctx.set_shadow_blur(0.0);
    }
}
