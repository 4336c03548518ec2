//! Immediate-mode drawing
//!
//! The simulation draws through [`Surface`]; the browser client implements it
//! on a canvas 2D context and tests use [`Recorder`].

use glam::Vec2;

use crate::components::{Ball, Paddle};

/// Blurred glow behind a shape or text
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f32,
}

/// Solid fill with optional glow
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: String,
    pub shadow: Option<Shadow>,
}

impl Fill {
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            shadow: None,
        }
    }

    pub fn glowing(color: &str, shadow_color: &str, blur: f32) -> Self {
        Self {
            color: color.to_string(),
            shadow: Some(Shadow {
                color: shadow_color.to_string(),
                blur,
            }),
        }
    }
}

/// Line style
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
    pub dash: Vec<f32>, // empty = solid
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub align: TextAlign,
    pub fill: Fill,
}

/// 2D drawing target. Every call carries its full style.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: &Fill);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Fill,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        fill: Fill,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Vec2,
        style: TextStyle,
    },
}

/// Surface that keeps every call, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { origin, size, .. } => Some((*origin, *size)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: fill.clone(),
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: &Fill) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            fill: fill.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }
}

const BALL_GLOW_BLUR: f32 = 25.0;
const PADDLE_GLOW_BLUR: f32 = 15.0;
const PADDLE_SEGMENTS: usize = 4;

impl Ball {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let fill = if self.glow() > 0.0 {
            Fill::glowing(self.color(), self.color(), BALL_GLOW_BLUR * self.glow())
        } else {
            Fill::solid(self.color())
        };
        surface.fill_circle(self.pos(), self.radius(), &fill);
    }
}

impl Paddle {
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.is_moving() {
            surface.fill_rect(self.pos(), self.size(), &Fill::solid(self.color()));
            return;
        }

        let fill = Fill::glowing(self.color(), self.color(), PADDLE_GLOW_BLUR);
        surface.fill_rect(self.pos(), self.size(), &fill);

        let seam = Stroke {
            color: "rgba(0, 0, 0, 0.35)".to_string(),
            width: 1.0,
            dash: Vec::new(),
        };
        let step = self.height() / PADDLE_SEGMENTS as f32;
        for i in 1..PADDLE_SEGMENTS {
            let y = self.y() + step * i as f32;
            surface.stroke_line(
                Vec2::new(self.x(), y),
                Vec2::new(self.x() + self.width(), y),
                &seam,
            );
        }
    }
}
