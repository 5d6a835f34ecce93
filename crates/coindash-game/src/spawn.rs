//! Spawn manager: keeps the arena populated
//!
//! At most one coin and at most four boulders exist; `check_spawns` runs once
//! per tick and refills whatever is missing. Entities are never pooled - a
//! consumed coin is discarded and a fresh one is built on respawn.

use crate::entity::{Entity, EntityKind};
use crate::registry::{EntityRegistry, BOULDER_SLOTS};
use coindash_core::{Result, Vec3};
use coindash_physics::PhysicsWorld;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Spawn positions sit on one of the four arena corners, this far out
const CORNER_OFFSET: f32 = 20.0;
const BOULDER_SPAWN_HEIGHT: f32 = 5.0;
const BOULDER_RADIUS: f32 = 1.0;
const COIN_SPAWN_HEIGHT: f32 = 2.0;
const COIN_RADIUS: f32 = 0.5;

/// Creates coins and boulders on demand
pub struct SpawnManager {
    rng: StdRng,
}

impl SpawnManager {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for deterministic spawn positions
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run both spawn checks. Called once per tick; the existence checks
    /// inside each make repeated calls idempotent.
    pub fn check_spawns(
        &mut self,
        physics: &mut PhysicsWorld,
        registry: &mut EntityRegistry,
    ) -> Result<()> {
        self.spawn_boulders(physics, registry)?;
        self.spawn_coin(physics, registry)?;
        Ok(())
    }

    /// Fill every empty boulder slot with a fresh boulder. Occupied slots
    /// are never touched.
    pub fn spawn_boulders(
        &mut self,
        physics: &mut PhysicsWorld,
        registry: &mut EntityRegistry,
    ) -> Result<()> {
        for index in 0..BOULDER_SLOTS {
            if !registry.boulder_slot_is_empty(index) {
                continue;
            }
            let position = Vec3::new(
                self.corner_coordinate(),
                BOULDER_SPAWN_HEIGHT,
                self.corner_coordinate(),
            );
            let (body, collider) = physics.spawn_dynamic_ball(position, BOULDER_RADIUS, 1.0);
            registry.fill_boulder_slot(index, Entity::new(EntityKind::Boulder, body, collider))?;
            log::debug!("spawned boulder in slot {index} at {position:?}");
        }
        Ok(())
    }

    /// Create the coin if none exists
    pub fn spawn_coin(
        &mut self,
        physics: &mut PhysicsWorld,
        registry: &mut EntityRegistry,
    ) -> Result<()> {
        if registry.coin().is_some() {
            return Ok(());
        }
        let position = Vec3::new(
            self.corner_coordinate(),
            COIN_SPAWN_HEIGHT,
            self.corner_coordinate(),
        );
        let (body, collider) = physics.spawn_dynamic_ball(position, COIN_RADIUS, 1.0);
        registry.set_coin(Entity::new(EntityKind::Coin, body, collider))?;
        log::debug!("spawned coin at {position:?}");
        Ok(())
    }

    /// One corner coordinate per axis: +20 or -20 with even odds, never the
    /// center. The draw is a uniform integer in [1, 100] split at 50.
    pub fn corner_coordinate(&mut self) -> f32 {
        if self.rng.gen_range(1..=100) > 50 {
            CORNER_OFFSET
        } else {
            -CORNER_OFFSET
        }
    }
}

impl Default for SpawnManager {
    fn default() -> Self {
        Self::new()
    }
}
