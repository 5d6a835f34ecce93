//! Physics world wrapping Rapier 3D

use coindash_core::Vec3;
use rapier3d::prelude::*;

/// Wraps Rapier's physics pipeline and body/collider sets.
///
/// Collision events cross from the solver to the game thread through a
/// channel: `step()` publishes, `drain_collision_events()` consumes. A step
/// always completes before its events are drained, so the resolver never
/// observes entity state mid-integration.
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,

    /// Collision events from the last step
    collision_recv: crossbeam::channel::Receiver<CollisionEvent>,
    contact_force_recv: crossbeam::channel::Receiver<ContactForceEvent>,
    event_handler: ChannelEventCollector,
}

impl PhysicsWorld {
    /// Create a new physics world with standard gravity
    pub fn new() -> Self {
        let (collision_send, collision_recv) = crossbeam::channel::unbounded();
        let (contact_force_send, contact_force_recv) = crossbeam::channel::unbounded();
        let event_handler = ChannelEventCollector::new(collision_send, contact_force_send);

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![0.0, -9.81, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            collision_recv,
            contact_force_recv,
            event_handler,
        }
    }

    /// Override world gravity
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = to_na(gravity);
    }

    /// Step the simulation by dt seconds, split into `substeps` sub-steps.
    ///
    /// Forces accumulated via `apply_central_force` last exactly one call to
    /// `step()`; they are cleared once the step completes.
    pub fn step(&mut self, dt: f32, substeps: u32) {
        let substeps = substeps.max(1);
        self.integration_parameters.dt = dt / substeps as f32;

        for _ in 0..substeps {
            self.physics_pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.island_manager,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.rigid_body_set,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                &mut self.ccd_solver,
                Some(&mut self.query_pipeline),
                &(),
                &self.event_handler,
            );
        }

        for (_, body) in self.rigid_body_set.iter_mut() {
            body.reset_forces(false);
        }
    }

    /// Drain collision events from the last step
    pub fn drain_collision_events(&self) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.collision_recv.try_recv() {
            events.push(event);
        }
        events
    }

    /// Drain contact force events from the last step
    pub fn drain_contact_force_events(&self) -> Vec<ContactForceEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.contact_force_recv.try_recv() {
            events.push(event);
        }
        events
    }

    /// Insert a rigid body and return its handle
    pub fn insert_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Insert a collider attached to a rigid body
    pub fn insert_collider_with_parent(
        &mut self,
        collider: Collider,
        parent: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    /// Get a rigid body by handle
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable rigid body by handle
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    // --- Per-body accessors used by the motion controller ---
    //
    // Missing handles are treated as absent entities: setters become no-ops
    // and getters return None.

    /// Set linear/angular damping on a body
    pub fn set_damping(&mut self, handle: RigidBodyHandle, linear: f32, angular: f32) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linear_damping(linear);
            body.set_angular_damping(angular);
        }
    }

    /// Set a body's angular velocity directly
    pub fn set_angular_velocity(&mut self, handle: RigidBodyHandle, angvel: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_angvel(to_na(angvel), true);
        }
    }

    /// Teleport a body to a new translation
    pub fn set_translation(&mut self, handle: RigidBodyHandle, position: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(to_na(position), true);
        }
    }

    /// Overwrite a body's linear velocity
    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, linvel: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(to_na(linvel), true);
        }
    }

    /// Apply a world-space force at a body's center of mass
    pub fn apply_central_force(&mut self, handle: RigidBodyHandle, force: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.add_force(to_na(force), true);
        }
    }

    /// Rotate a local-space vector into world space using the body's
    /// current orientation
    pub fn rotate_to_world(&self, handle: RigidBodyHandle, local: Vec3) -> Option<Vec3> {
        let body = self.rigid_body_set.get(handle)?;
        let world = body.rotation() * to_na(local);
        Some(from_na(world))
    }

    /// A body's current linear velocity
    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(handle).map(|b| from_na(*b.linvel()))
    }

    /// A body's current angular velocity
    pub fn angular_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set.get(handle).map(|b| from_na(*b.angvel()))
    }

    /// A body's current translation
    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.rigid_body_set
            .get(handle)
            .map(|b| from_na(*b.translation()))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn to_na(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

pub(crate) fn from_na(v: Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_physics_world() {
        let world = PhysicsWorld::new();
        assert_eq!(world.rigid_body_set.len(), 0);
        assert_eq!(world.collider_set.len(), 0);
    }

    #[test]
    fn test_gravity_simulation() {
        let mut world = PhysicsWorld::new();
        world.set_gravity(Vec3::new(0.0, -10.0, 0.0));

        let (handle, _) = world.spawn_dynamic_ball(Vec3::new(0.0, 10.0, 0.0), 0.5, 1.0);
        let initial_y = world.translation(handle).unwrap().y;

        for _ in 0..60 {
            world.step(1.0 / 60.0, 2);
        }

        let final_y = world.translation(handle).unwrap().y;
        assert!(final_y < initial_y);
    }

    #[test]
    fn test_central_force_lasts_one_step() {
        let mut world = PhysicsWorld::new();
        world.set_gravity(Vec3::ZERO);

        let (handle, _) = world.spawn_dynamic_ball(Vec3::ZERO, 0.5, 1.0);

        world.apply_central_force(handle, Vec3::new(100.0, 0.0, 0.0));
        world.step(1.0 / 60.0, 2);
        let v1 = world.linear_velocity(handle).unwrap().x;
        assert!(v1 > 0.0);

        // No new force: velocity must not keep growing
        world.step(1.0 / 60.0, 2);
        let v2 = world.linear_velocity(handle).unwrap().x;
        assert!(v2 <= v1 + 1e-4);
    }

    #[test]
    fn test_collision_events_flow_through_channel() {
        let mut world = PhysicsWorld::new();
        world.set_gravity(Vec3::new(0.0, -10.0, 0.0));

        world.spawn_fixed_cuboid(Vec3::ZERO, Vec3::new(10.0, 0.5, 10.0));
        let (ball, _) = world.spawn_dynamic_ball(Vec3::new(0.0, 2.0, 0.0), 0.5, 1.0);

        let mut started = Vec::new();
        for _ in 0..240 {
            world.step(1.0 / 60.0, 2);
            for event in world.drain_collision_events() {
                if let CollisionEvent::Started(..) = event {
                    started.push(event);
                }
            }
        }

        assert!(!started.is_empty());
        assert!(world.drain_contact_force_events().is_empty());
        // Ball came to rest on the slab
        assert!(world.translation(ball).unwrap().y > 0.0);
    }

    #[test]
    fn test_rotate_to_world() {
        let mut world = PhysicsWorld::new();

        // Yaw of 90 degrees maps local +z onto world +x
        let (handle, _) = world.spawn_dynamic_cuboid(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            1.0,
            std::f32::consts::FRAC_PI_2,
        );

        let world_vec = world
            .rotate_to_world(handle, Vec3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert!((world_vec.x - 1.0).abs() < 1e-5);
        assert!(world_vec.z.abs() < 1e-5);
    }

    #[test]
    fn test_remove_rigid_body() {
        let mut world = PhysicsWorld::new();
        let (handle, _) = world.spawn_dynamic_ball(Vec3::ZERO, 0.5, 1.0);
        assert_eq!(world.rigid_body_set.len(), 1);
        assert_eq!(world.collider_set.len(), 1);

        world.remove_rigid_body(handle);
        assert_eq!(world.rigid_body_set.len(), 0);
        assert_eq!(world.collider_set.len(), 0);
        assert!(world.get_rigid_body(handle).is_none());
    }
}
