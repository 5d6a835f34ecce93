//! Entity registry: who exists in the arena
//!
//! Owns the permanent entities (player, ground, walls), the fixed-capacity
//! boulder slots, and the optional coin. Boulder slots are index-addressed so
//! "slot occupied" is a checkable invariant rather than a null hole in a list.

use crate::entity::{Entity, EntityKind};
use coindash_core::{EntityId, GameError, Result};
use coindash_physics::ColliderHandle;
use std::collections::HashMap;

/// Fixed number of boulder hazards the arena sustains
pub const BOULDER_SLOTS: usize = 4;

/// Tracks every live entity and maps physics colliders back to them
pub struct EntityRegistry {
    player: Entity,
    ground: Entity,
    boulders: [Option<Entity>; BOULDER_SLOTS],
    coin: Option<Entity>,
    /// All live entities by id, including arena geometry
    entities: HashMap<EntityId, Entity>,
    /// Collision events arrive as collider handles
    by_collider: HashMap<ColliderHandle, EntityId>,
}

impl EntityRegistry {
    /// Create a registry from the permanent arena entities.
    ///
    /// The player entity exists for the registry's whole lifetime; there is
    /// no way to remove it.
    pub fn new(player: Entity, ground: Entity, walls: Vec<Entity>) -> Self {
        let mut registry = Self {
            player,
            ground,
            boulders: [None; BOULDER_SLOTS],
            coin: None,
            entities: HashMap::new(),
            by_collider: HashMap::new(),
        };
        registry.index(player);
        registry.index(ground);
        for wall in walls {
            registry.index(wall);
        }
        registry
    }

    fn index(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
        self.by_collider.insert(entity.collider, entity.id);
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn ground(&self) -> &Entity {
        &self.ground
    }

    pub fn coin(&self) -> Option<&Entity> {
        self.coin.as_ref()
    }

    /// Iterate over the boulders currently present
    pub fn boulders(&self) -> impl Iterator<Item = &Entity> {
        self.boulders.iter().flatten()
    }

    pub fn boulder_count(&self) -> usize {
        self.boulders.iter().flatten().count()
    }

    pub fn boulder_slot_is_empty(&self, index: usize) -> bool {
        self.boulders.get(index).map_or(false, |slot| slot.is_none())
    }

    /// Fill an empty boulder slot. Occupied slots are never replaced.
    pub fn fill_boulder_slot(&mut self, index: usize, entity: Entity) -> Result<()> {
        let slot = self
            .boulders
            .get_mut(index)
            .ok_or(GameError::SlotOutOfRange(index))?;
        if slot.is_some() {
            return Err(GameError::SlotOccupied(index));
        }
        *slot = Some(entity);
        self.entities.insert(entity.id, entity);
        self.by_collider.insert(entity.collider, entity.id);
        Ok(())
    }

    /// Install a freshly spawned coin. At most one coin exists at a time.
    pub fn set_coin(&mut self, entity: Entity) -> Result<()> {
        if self.coin.is_some() {
            return Err(GameError::CoinAlreadyPresent);
        }
        self.coin = Some(entity);
        self.entities.insert(entity.id, entity);
        self.by_collider.insert(entity.collider, entity.id);
        Ok(())
    }

    /// Remove the coin from the registry, returning it so the caller can
    /// despawn its body. The slot becomes eligible for the next spawn check.
    pub fn take_coin(&mut self) -> Option<Entity> {
        let coin = self.coin.take()?;
        self.entities.remove(&coin.id);
        self.by_collider.remove(&coin.collider);
        Some(coin)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Resolve a physics collider back to its entity id
    pub fn entity_by_collider(&self, collider: ColliderHandle) -> Option<EntityId> {
        self.by_collider.get(&collider).copied()
    }

    /// Given a collision pair, return the non-player participant if the
    /// player was involved at all.
    pub fn other_of_player(&self, a: EntityId, b: EntityId) -> Option<Entity> {
        let other = if a == self.player.id {
            b
        } else if b == self.player.id {
            a
        } else {
            return None;
        };
        self.entities.get(&other).copied()
    }
}
