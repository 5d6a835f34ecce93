//! Game events

use coindash_core::EntityId;

/// Events broadcast between game systems.
///
/// Collision events are produced by the physics step and consumed by the
/// collision resolver on the same tick, before spawns run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Two entities came into contact
    CollisionStarted {
        entity_a: EntityId,
        entity_b: EntityId,
    },
    /// Two entities stopped touching
    CollisionEnded {
        entity_a: EntityId,
        entity_b: EntityId,
    },
}
