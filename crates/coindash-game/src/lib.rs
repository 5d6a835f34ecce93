//! Coindash Game - the authoritative game core
//!
//! A first-person arena game: the player body collects a respawning coin for
//! score and loses lives to rolling boulders. This crate owns:
//! - `EntityKind` / `Entity` — categorical tags over physics bodies
//! - `EntityRegistry` — player, arena geometry, boulder slots, the coin
//! - `SpawnManager` — "at most one coin, at most four boulders" policy
//! - collision dispatch — collision events to game-state transitions
//! - `MotionController` — input and autonomous forces, camera pitch
//! - `GameSession` — the per-tick frame loop tying it all together

pub mod arena;
pub mod collision;
pub mod entity;
pub mod motion;
pub mod registry;
pub mod session;
pub mod spawn;
pub mod state;

pub use entity::{Entity, EntityKind};
pub use motion::MotionController;
pub use registry::{EntityRegistry, BOULDER_SLOTS};
pub use session::{ControlState, GameSession};
pub use spawn::SpawnManager;
pub use state::{GameState, LivesDisplay};
