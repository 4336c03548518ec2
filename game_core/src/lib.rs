//! Pong simulation core
//!
//! Host-independent: the browser (or a test) supplies a [`render::Surface`] to
//! draw on and a [`host::Host`] for logging and timers, then calls
//! [`Game::frame`] once per display refresh.

pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod host;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use host::*;
pub use params::*;
pub use render::*;
pub use resources::*;
