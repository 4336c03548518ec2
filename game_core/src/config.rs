use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_initial_speed: f32,
    pub ai_deadzone: f32,
    pub ai_skip_chance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_initial_speed: Params::BALL_SERVE_SPEED,
            ai_deadzone: Params::AI_DEADZONE,
            ai_skip_chance: Params::AI_SKIP_CHANCE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the arena, where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Top-left corner of a paddle at the start of a session
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.arena_width - self.paddle_width - self.paddle_margin,
        };
        Vec2::new(x, self.arena_height / 2.0 - self.paddle_height / 2.0)
    }
}

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // left, keyboard
    Ai,     // right, scripted
}

/// Named color tokens looked up once at construction
pub const PADDLE_COLOR_TOKEN: &str = "--color-paddle";
pub const BALL_COLOR_TOKEN: &str = "--color-ball";
pub const TEXT_COLOR_TOKEN: &str = "--color-text";

/// Colors used when drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub paddle: String,
    pub ball: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            paddle: "#ff00ff".to_string(),
            ball: "#00ffff".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

impl Theme {
    /// Build a theme from a token lookup, keeping the default for any token
    /// that is missing or blank.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |token: &str, fallback: String| {
            lookup(token)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            paddle: pick(PADDLE_COLOR_TOKEN, defaults.paddle),
            ball: pick(BALL_COLOR_TOKEN, defaults.ball),
            text: pick(TEXT_COLOR_TOKEN, defaults.text),
        }
    }
}
