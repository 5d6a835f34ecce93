//! Game entities: categorical tags over physics bodies

use coindash_core::EntityId;
use coindash_physics::{ColliderHandle, RigidBodyHandle};

/// Closed set of entity categories.
///
/// Collision response dispatches on this tag alone; there are no open-ended
/// or scripted categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Ground,
    Wall,
    Boulder,
    Coin,
}

/// A physics-backed game entity.
///
/// Position, orientation, and velocity live in the physics world; the game
/// side keeps only identity, category, and the handles to reach the body.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

impl Entity {
    pub fn new(kind: EntityKind, body: RigidBodyHandle, collider: ColliderHandle) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            body,
            collider,
        }
    }
}
