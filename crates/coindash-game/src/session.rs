//! Game session: the per-tick frame loop
//!
//! Orders one simulation tick as: input/motion, physics step, collision
//! dispatch, spawn check. Collision events produced by a step are always
//! resolved before that tick's spawns run.

use crate::arena;
use crate::collision;
use crate::motion::MotionController;
use crate::registry::EntityRegistry;
use crate::spawn::SpawnManager;
use crate::state::{GameState, LivesDisplay};
use coindash_core::Result;
use coindash_physics::{CollisionEvent, PhysicsWorld};
use coindash_runtime::{EventBus, GameEvent, InputState};

/// Physics sub-steps per simulation tick
const PHYSICS_SUBSTEPS: u32 = 2;

/// Whether player input currently reaches the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Cursor not captured: input is ignored, the simulation keeps running
    Disabled,
    /// Cursor captured: input drives the player
    Active,
}

/// Owns every component of a running game and performs all state mutation
/// sequentially from `tick`.
pub struct GameSession {
    physics: PhysicsWorld,
    registry: EntityRegistry,
    spawner: SpawnManager,
    motion: MotionController,
    bus: EventBus,
    pub input: InputState,
    pub state: GameState,
    control: ControlState,
    display: Box<dyn LivesDisplay>,
}

impl GameSession {
    /// Create a session with entropy-seeded spawn positions
    pub fn new(display: Box<dyn LivesDisplay>) -> Result<Self> {
        Self::build(SpawnManager::new(), display)
    }

    /// Create a session with deterministic spawn positions
    pub fn with_seed(seed: u64, display: Box<dyn LivesDisplay>) -> Result<Self> {
        Self::build(SpawnManager::with_seed(seed), display)
    }

    fn build(mut spawner: SpawnManager, mut display: Box<dyn LivesDisplay>) -> Result<Self> {
        let mut physics = PhysicsWorld::new();
        let mut registry = arena::build(&mut physics);

        // The arena opens populated
        spawner.check_spawns(&mut physics, &mut registry)?;

        let state = GameState::new();
        display.update_lives(state.lives, state.score);

        Ok(Self {
            physics,
            registry,
            spawner,
            motion: MotionController::new(),
            bus: EventBus::new(),
            input: InputState::new(),
            state,
            control: ControlState::Disabled,
            display,
        })
    }

    pub fn control_state(&self) -> ControlState {
        self.control
    }

    /// Cursor captured: route input into the simulation
    pub fn activate(&mut self) {
        self.control = ControlState::Active;
        self.input.enabled = true;
        log::info!("controls enabled");
    }

    /// Cursor released or capture failed: input no longer reaches the
    /// simulation, which keeps running regardless.
    pub fn deactivate(&mut self) {
        self.control = ControlState::Disabled;
        self.input.enabled = false;
        log::info!("controls disabled");
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    /// Camera pitch in radians, for whoever renders the view
    pub fn camera_pitch(&self) -> f32 {
        self.motion.camera_pitch()
    }

    /// Advance the simulation by one fixed timestep
    pub fn tick(&mut self, delta: f32) -> Result<()> {
        self.motion.update(
            &mut self.input,
            delta,
            &mut self.physics,
            &self.registry,
            &mut self.state,
        );

        self.physics.step(delta, PHYSICS_SUBSTEPS);

        // Everything this step produced resolves before spawns run
        for event in self.physics.drain_collision_events() {
            match event {
                CollisionEvent::Started(h1, h2, _) => {
                    if let (Some(a), Some(b)) = (
                        self.registry.entity_by_collider(h1),
                        self.registry.entity_by_collider(h2),
                    ) {
                        self.bus.push(GameEvent::CollisionStarted {
                            entity_a: a,
                            entity_b: b,
                        });
                    }
                }
                CollisionEvent::Stopped(h1, h2, _) => {
                    if let (Some(a), Some(b)) = (
                        self.registry.entity_by_collider(h1),
                        self.registry.entity_by_collider(h2),
                    ) {
                        self.bus.push(GameEvent::CollisionEnded {
                            entity_a: a,
                            entity_b: b,
                        });
                    }
                }
            }
        }

        let events = self.bus.drain();
        collision::dispatch(
            &events,
            &mut self.physics,
            &mut self.registry,
            &mut self.state,
            self.display.as_mut(),
        );

        // Spawns run every tick, captured or not
        self.spawner.check_spawns(&mut self.physics, &mut self.registry)?;

        Ok(())
    }
}
