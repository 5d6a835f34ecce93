//! Input state management
//!
//! Keyboard state with action-name bindings, plus accumulated mouse-look
//! deltas. The `enabled` flag mirrors cursor capture: while it is false the
//! simulation ignores movement input entirely.

use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Radians of look rotation per pixel of raw mouse motion
const MOUSE_SENSITIVITY: f64 = 0.003;

/// Snapshot of the player's intent for one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Accumulated yaw delta since the last consumed tick, radians
    pub yaw: f32,
    /// Accumulated pitch delta since the last consumed tick, radians
    pub pitch: f32,
}

/// Tracks keyboard and mouse input state per frame
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
    /// Accumulated yaw look delta, radians
    yaw: f64,
    /// Accumulated pitch look delta, radians
    pitch: f64,
    /// Whether input affects the simulation (false while the cursor is free)
    pub enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            action_map: Self::default_action_map(),
            yaw: 0.0,
            pitch: 0.0,
            enabled: false,
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        map.insert("move_forward".into(), vec![KeyCode::KeyW]);
        map.insert("move_backward".into(), vec![KeyCode::KeyS]);
        map.insert("move_left".into(), vec![KeyCode::KeyA]);
        map.insert("move_right".into(), vec![KeyCode::KeyD]);
        map.insert("jump".into(), vec![KeyCode::Space]);
        map
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Process raw mouse delta (device motion while the cursor is captured)
    pub fn process_mouse_raw_delta(&mut self, dx: f64, dy: f64) {
        self.yaw -= dx * MOUSE_SENSITIVITY;
        self.pitch -= dy * MOUSE_SENSITIVITY;
    }

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Is an action currently held? (any bound key is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Snapshot the current intent for one simulation tick
    pub fn sample_intent(&self) -> MoveIntent {
        MoveIntent {
            forward: self.is_action_pressed("move_forward"),
            backward: self.is_action_pressed("move_backward"),
            left: self.is_action_pressed("move_left"),
            right: self.is_action_pressed("move_right"),
            jump: self.is_action_pressed("jump"),
            yaw: self.yaw as f32,
            pitch: self.pitch as f32,
        }
    }

    /// Zero the accumulated look deltas. Called once per enabled tick after
    /// the motion controller has consumed them.
    pub fn reset_look(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
