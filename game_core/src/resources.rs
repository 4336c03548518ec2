use std::collections::HashMap;

use glam::Vec2;

use crate::config::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// Scoreboard text, e.g. "3 - 1"
    pub fn label(&self) -> String {
        format!("{} - {}", self.player, self.ai)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: Option<Side>,
    pub paddle_hit: Option<(Side, Vec2)>, // paddle and contact point
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.paddle_hit = None;
        self.ball_hit_wall = false;
    }
}

/// Keys that move the player paddle
pub const UP_KEYS: [&str; 3] = ["w", "W", "ArrowUp"];
pub const DOWN_KEYS: [&str; 3] = ["s", "S", "ArrowDown"];

/// Pressed state per key identifier.
///
/// Written by the host's input adapter between frames, read by the update step.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.insert(key.to_string(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn any_down(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_down(k))
    }

    pub fn up_held(&self) -> bool {
        self.any_down(&UP_KEYS)
    }

    pub fn down_held(&self) -> bool {
        self.any_down(&DOWN_KEYS)
    }
}

/// Display-only state change that the host runs after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    ClearBallGlow,
    ClearImpact,
}
