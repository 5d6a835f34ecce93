//! Coindash Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `GameClock` — fixed-timestep accumulator for deterministic physics
//! - `InputState` / `MoveIntent` — keyboard and mouse tracking with action
//!   bindings, gated by cursor capture
//! - `GameEvent` / `EventBus` — typed event queue for collision dispatch

mod clock;
mod event;
mod event_bus;
mod input;

pub use clock::GameClock;
pub use event::GameEvent;
pub use event_bus::EventBus;
pub use input::{InputState, MoveIntent};
