//! Input management system
//!
//! The OS event loop lives outside the engine; it reports key transitions
//! through [`InputState::press`] / [`InputState::release`] and the engine
//! reads the resulting state once per tick.

use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec2;

/// Keyboard state for the current and previous frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down
    pub fn press(&mut self, key: KeyCode) {
        self.current.insert(key);
    }

    /// Record a key going up
    pub fn release(&mut self, key: KeyCode) {
        self.current.remove(&key);
    }

    /// Record a key transition
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// Release every key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.current.clear();
    }

    /// Close the frame: the current state becomes the previous state
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.current);
    }

    /// Whether the key is held this frame
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    /// Whether the key went down this frame
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// Whether the key went up this frame
    pub fn is_just_released(&self, key: KeyCode) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }

    /// Directional input with each axis in {-1, 0, +1}
    ///
    /// Y grows downward, so `up` contributes -1. Opposite keys cancel.
    pub fn movement_vector(&self, bindings: &MovementBindings) -> Vec2 {
        let mut movement = Vec2::zeros();
        if self.is_pressed(bindings.up) {
            movement.y -= 1.0;
        }
        if self.is_pressed(bindings.down) {
            movement.y += 1.0;
        }
        if self.is_pressed(bindings.left) {
            movement.x -= 1.0;
        }
        if self.is_pressed(bindings.right) {
            movement.x += 1.0;
        }
        movement
    }
}

/// Keys composing the directional movement vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementBindings {
    /// Key moving toward negative Y
    pub up: KeyCode,
    /// Key moving toward positive Y
    pub down: KeyCode,
    /// Key moving toward negative X
    pub left: KeyCode,
    /// Key moving toward positive X
    pub right: KeyCode,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
