//! Motion controller: per-tick control resolution
//!
//! Translates the sampled input intent into forces on the player, drives the
//! autonomous coin/boulder drift, and tracks camera pitch. Locomotion only
//! applies while grounded; airborne input is deliberately inert and the
//! player free-falls until the next ground contact.

use crate::registry::EntityRegistry;
use crate::state::GameState;
use coindash_core::Vec3;
use coindash_physics::PhysicsWorld;
use coindash_runtime::InputState;

const MOVE_FORCE: f32 = 400.0;
const JUMP_FORCE: f32 = 4000.0;
const PLAYER_LINEAR_DAMPING: f32 = 0.7;
const PLAYER_ANGULAR_DAMPING: f32 = 0.1;
/// Input force is withheld, not clamped, above these speeds
const MAX_INPUT_SPEED_X: f32 = 20.0;
const MAX_INPUT_SPEED_Y: f32 = 10.0;
/// Jumping above this height releases the grounded flag
const JUMP_CLEAR_HEIGHT: f32 = 4.0;
const COIN_DRIFT_FORCE: f32 = 400.0;
const BOULDER_DRIFT_FORCE: f32 = 500.0;
/// Camera pitch limit, 10 degrees either way
const PITCH_LIMIT: f32 = 10.0 * (std::f32::consts::PI / 180.0);

/// Applies control forces each tick and owns the camera pitch angle
pub struct MotionController {
    camera_pitch: f32,
}

impl MotionController {
    pub fn new() -> Self {
        Self { camera_pitch: 0.0 }
    }

    /// Current camera pitch in radians, always within the clamp range
    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    /// Run one tick of control resolution. `delta` is the fixed timestep in
    /// seconds.
    pub fn update(
        &mut self,
        input: &mut InputState,
        delta: f32,
        physics: &mut PhysicsWorld,
        registry: &EntityRegistry,
        state: &mut GameState,
    ) {
        let player = registry.player().body;

        if !input.enabled {
            // Cursor is free: stop rotating, apply nothing
            physics.set_angular_velocity(player, Vec3::ZERO);
            return;
        }

        let intent = input.sample_intent();

        if state.grounded {
            let mut velocity = Vec3::ZERO;
            if intent.forward {
                velocity.z -= MOVE_FORCE * delta;
            }
            if intent.backward {
                velocity.z += MOVE_FORCE * delta;
            }
            if intent.left {
                velocity.x -= MOVE_FORCE * delta;
            }
            if intent.right {
                velocity.x += MOVE_FORCE * delta;
            }
            if intent.jump {
                velocity.y += JUMP_FORCE * delta;
                let height = physics.translation(player).map_or(0.0, |p| p.y);
                if height > JUMP_CLEAR_HEIGHT {
                    state.grounded = false;
                }
            }

            physics.set_damping(player, PLAYER_LINEAR_DAMPING, PLAYER_ANGULAR_DAMPING);
            // Yaw is an instantaneous turn rate, no smoothing
            physics.set_angular_velocity(player, Vec3::new(0.0, intent.yaw, 0.0));

            if let (Some(direction), Some(linvel)) = (
                physics.rotate_to_world(player, velocity),
                physics.linear_velocity(player),
            ) {
                if linvel.x.abs() < MAX_INPUT_SPEED_X && linvel.y.abs() < MAX_INPUT_SPEED_Y {
                    physics.apply_central_force(player, direction);
                }
            }

            drive_drift(delta, physics, registry);
            self.camera_look(intent.pitch);
        }

        // Look input is consumed every enabled tick, grounded or not
        input.reset_look();
    }

    /// Add the tick's pitch delta and constrain the camera pitch
    fn camera_look(&mut self, pitch_delta: f32) {
        self.camera_pitch = (self.camera_pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Push the coin and every boulder along their own facing. These are
/// continuous forces, so the hazards drift and roll indefinitely.
fn drive_drift(delta: f32, physics: &mut PhysicsWorld, registry: &EntityRegistry) {
    if let Some(coin) = registry.coin() {
        let drift = Vec3::new(0.0, 0.0, COIN_DRIFT_FORCE * delta);
        if let Some(force) = physics.rotate_to_world(coin.body, drift) {
            physics.apply_central_force(coin.body, force);
        }
    }
    for boulder in registry.boulders() {
        let drift = Vec3::new(0.0, 0.0, BOULDER_DRIFT_FORCE * delta);
        if let Some(force) = physics.rotate_to_world(boulder.body, drift) {
            physics.apply_central_force(boulder.body, force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena;
    use winit::keyboard::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    struct Fixture {
        physics: PhysicsWorld,
        registry: EntityRegistry,
        input: InputState,
        state: GameState,
        motion: MotionController,
    }

    impl Fixture {
        fn new() -> Self {
            let mut physics = PhysicsWorld::new();
            let registry = arena::build(&mut physics);
            Self {
                physics,
                registry,
                input: InputState::new(),
                state: GameState::new(),
                motion: MotionController::new(),
            }
        }

        fn tick(&mut self) {
            self.motion.update(
                &mut self.input,
                DT,
                &mut self.physics,
                &self.registry,
                &mut self.state,
            );
            self.physics.step(DT, 2);
        }

        fn player_velocity(&self) -> Vec3 {
            self.physics
                .linear_velocity(self.registry.player().body)
                .unwrap()
        }
    }

    #[test]
    fn test_disabled_input_zeroes_angular_velocity() {
        let mut fx = Fixture::new();
        fx.physics.set_gravity(Vec3::ZERO);
        let player = fx.registry.player().body;
        fx.physics
            .set_angular_velocity(player, Vec3::new(0.0, 3.0, 0.0));

        fx.input.enabled = false;
        fx.input.process_key_down(KeyCode::KeyW);
        fx.state.grounded = true;
        fx.tick();

        let angvel = fx.physics.angular_velocity(player).unwrap();
        assert!(angvel.length() < 1e-6);

        // And movement keys apply no force while disabled
        let v = fx.player_velocity();
        assert!(v.length() < 1e-3);
    }

    #[test]
    fn test_airborne_input_is_inert() {
        let mut fx = Fixture::new();
        fx.input.enabled = true;
        fx.state.grounded = false;
        fx.input.process_key_down(KeyCode::KeyW);
        fx.input.process_key_down(KeyCode::KeyD);

        for _ in 0..30 {
            fx.tick();
        }

        // Free-fall only: gravity moves y, input moves nothing
        let v = fx.player_velocity();
        assert!(v.x.abs() < 1e-3);
        assert!(v.z.abs() < 1e-3);
        assert!(v.y < 0.0);
    }

    #[test]
    fn test_grounded_input_moves_the_player() {
        let mut fx = Fixture::new();
        fx.input.enabled = true;
        fx.state.grounded = true;
        fx.input.process_key_down(KeyCode::KeyW);

        for _ in 0..10 {
            fx.tick();
        }

        let v = fx.player_velocity();
        let horizontal = (v.x * v.x + v.z * v.z).sqrt();
        assert!(horizontal > 0.1, "expected movement, got {horizontal}");
    }

    #[test]
    fn test_input_force_blocked_above_speed_cap() {
        let mut fx = Fixture::new();
        fx.physics.set_gravity(Vec3::ZERO);
        let player = fx.registry.player().body;

        fx.input.enabled = true;
        fx.state.grounded = true;
        fx.input.process_key_down(KeyCode::KeyW);

        // Rising fast: vertical speed above the cap withholds input force
        fx.physics
            .set_linear_velocity(player, Vec3::new(0.0, 15.0, 0.0));
        fx.tick();
        let v = fx.player_velocity();
        let horizontal = (v.x * v.x + v.z * v.z).sqrt();
        assert!(horizontal < 1e-3, "force applied past the cap: {horizontal}");

        // Below the cap the same input accelerates
        fx.physics
            .set_linear_velocity(player, Vec3::new(0.0, 5.0, 0.0));
        fx.tick();
        let v = fx.player_velocity();
        let horizontal = (v.x * v.x + v.z * v.z).sqrt();
        assert!(horizontal > 1e-3);
    }

    #[test]
    fn test_jump_above_threshold_clears_grounded() {
        let mut fx = Fixture::new();
        fx.input.enabled = true;
        fx.state.grounded = true;
        fx.input.process_key_down(KeyCode::Space);

        // Player spawns at y=5, above the clear height
        fx.tick();
        assert!(!fx.state.grounded);
    }

    #[test]
    fn test_coin_and_boulders_drift_on_their_own() {
        let mut fx = Fixture::new();
        // Remove gravity so any speed comes from the drift forces alone
        fx.physics.set_gravity(Vec3::ZERO);
        crate::spawn::SpawnManager::with_seed(5)
            .check_spawns(&mut fx.physics, &mut fx.registry)
            .unwrap();

        fx.input.enabled = true;
        fx.state.grounded = true;

        for _ in 0..30 {
            fx.tick();
        }

        let coin = fx.registry.coin().unwrap();
        let coin_speed = fx.physics.linear_velocity(coin.body).unwrap().length();
        assert!(coin_speed > 1e-3);

        for boulder in fx.registry.boulders() {
            let speed = fx.physics.linear_velocity(boulder.body).unwrap().length();
            assert!(speed > 1e-3);
        }
    }

    #[test]
    fn test_camera_pitch_is_clamped() {
        let mut motion = MotionController::new();
        motion.camera_look(100.0);
        assert!((motion.camera_pitch() - PITCH_LIMIT).abs() < 1e-6);

        motion.camera_look(-200.0);
        assert!((motion.camera_pitch() + PITCH_LIMIT).abs() < 1e-6);

        motion.camera_look(0.01);
        assert!(motion.camera_pitch().abs() <= PITCH_LIMIT);
    }

    #[test]
    fn test_look_deltas_consumed_each_enabled_tick() {
        let mut fx = Fixture::new();
        fx.input.enabled = true;
        fx.state.grounded = false; // consumption is unconditional on grounding
        fx.input.process_mouse_raw_delta(50.0, 20.0);

        fx.tick();
        let intent = fx.input.sample_intent();
        assert_eq!(intent.yaw, 0.0);
        assert_eq!(intent.pitch, 0.0);
    }
}
