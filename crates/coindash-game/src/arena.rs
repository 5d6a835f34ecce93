//! Arena construction
//!
//! Builds the collision geometry of the walled arena and the player body.
//! Visuals (materials, lights, fog) belong to a renderer and are not part of
//! the core.

use crate::entity::{Entity, EntityKind};
use crate::registry::EntityRegistry;
use coindash_core::Vec3;
use coindash_physics::PhysicsWorld;

/// Arena gravity
pub const GRAVITY: Vec3 = Vec3::new(0.0, -10.0, 0.0);

/// Where the player starts, above the ground on the east side
pub const PLAYER_SPAWN: Vec3 = Vec3::new(20.0, 5.0, 5.0);
const PLAYER_SPAWN_YAW: f32 = 1.5;
const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const PLAYER_MASS: f32 = 1.0;

/// 50x50 floor, one unit thick
const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(25.0, 0.5, 25.0);
/// Walls stand 15 units tall at the floor's edge
const WALL_CENTER_HEIGHT: f32 = 7.0;
const WALL_HALF_HEIGHT: f32 = 7.5;
const WALL_HALF_LENGTH: f32 = 25.0;
const WALL_HALF_THICKNESS: f32 = 0.5;

/// Build the arena bodies and the player, returning the populated registry.
///
/// Coin and boulders are not created here; the spawn manager fills them in
/// on the first spawn check.
pub fn build(physics: &mut PhysicsWorld) -> EntityRegistry {
    physics.set_gravity(GRAVITY);

    let (body, collider) = physics.spawn_fixed_cuboid(Vec3::ZERO, GROUND_HALF_EXTENTS);
    let ground = Entity::new(EntityKind::Ground, body, collider);

    // North/south walls run along x, east/west walls along z
    let mut walls = Vec::with_capacity(4);
    for (position, half_extents) in [
        (
            Vec3::new(0.0, WALL_CENTER_HEIGHT, -WALL_HALF_LENGTH),
            Vec3::new(WALL_HALF_LENGTH, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
        ),
        (
            Vec3::new(0.0, WALL_CENTER_HEIGHT, WALL_HALF_LENGTH),
            Vec3::new(WALL_HALF_LENGTH, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
        ),
        (
            Vec3::new(WALL_HALF_LENGTH, WALL_CENTER_HEIGHT, 0.0),
            Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, WALL_HALF_LENGTH),
        ),
        (
            Vec3::new(-WALL_HALF_LENGTH, WALL_CENTER_HEIGHT, 0.0),
            Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, WALL_HALF_LENGTH),
        ),
    ] {
        let (body, collider) = physics.spawn_fixed_cuboid(position, half_extents);
        walls.push(Entity::new(EntityKind::Wall, body, collider));
    }

    let (body, collider) = physics.spawn_dynamic_cuboid(
        PLAYER_SPAWN,
        PLAYER_HALF_EXTENTS,
        PLAYER_MASS,
        PLAYER_SPAWN_YAW,
    );
    let player = Entity::new(EntityKind::Player, body, collider);

    EntityRegistry::new(player, ground, walls)
}
