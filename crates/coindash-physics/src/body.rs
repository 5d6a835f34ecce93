//! Body factories for the game's shapes
//!
//! Every collider is created with collision events enabled so the resolver
//! sees Player contacts without per-entity opt-in.

use crate::world::{to_na, PhysicsWorld};
use coindash_core::Vec3;
use rapier3d::prelude::*;

/// Friction applied to all game bodies (the arena surfaces are slick;
/// the player relies on damping rather than friction to stop)
const FRICTION: f32 = 0.4;

impl PhysicsWorld {
    /// Spawn a dynamic ball (boulders, the coin)
    pub fn spawn_dynamic_ball(
        &mut self,
        position: Vec3,
        radius: f32,
        mass: f32,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(position))
            .additional_mass(mass)
            .build();
        let body_handle = self.insert_rigid_body(body);

        let collider = ColliderBuilder::ball(radius)
            .friction(FRICTION)
            .restitution(0.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let collider_handle = self.insert_collider_with_parent(collider, body_handle);

        (body_handle, collider_handle)
    }

    /// Spawn a dynamic box with an initial yaw (the player)
    pub fn spawn_dynamic_cuboid(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        mass: f32,
        yaw: f32,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(position))
            .rotation(vector![0.0, yaw, 0.0])
            .additional_mass(mass)
            .build();
        let body_handle = self.insert_rigid_body(body);

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .friction(FRICTION)
            .restitution(0.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let collider_handle = self.insert_collider_with_parent(collider, body_handle);

        (body_handle, collider_handle)
    }

    /// Spawn a fixed box (ground, walls)
    pub fn spawn_fixed_cuboid(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = RigidBodyBuilder::fixed().translation(to_na(position)).build();
        let body_handle = self.insert_rigid_body(body);

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .friction(0.0)
            .restitution(0.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let collider_handle = self.insert_collider_with_parent(collider, body_handle);

        (body_handle, collider_handle)
    }
}
