//! Coindash Physics - Rapier 3D integration
//!
//! Provides physics simulation for the Coindash game:
//! - `PhysicsWorld` — wraps the Rapier pipeline and body/collider sets;
//!   collision events are published through a channel and drained on the
//!   game thread after each step, never read concurrently with it
//! - body factory methods for the game's shapes (dynamic balls and boxes,
//!   fixed boxes) with collision events enabled

mod body;
mod world;

pub use world::PhysicsWorld;

// The game layer works with Rapier handles and events directly.
pub use rapier3d::geometry::CollisionEvent;
pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};
