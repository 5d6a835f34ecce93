//! Coindash Player - Standalone game binary
//!
//! Owns the window, cursor capture, and input wiring; the game itself lives
//! in `coindash-game`.

mod app;
mod hud;

pub use app::PlayerApp;
pub use hud::ConsoleHud;
