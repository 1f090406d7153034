// Keyboard input mapping module
//
// Maps held keys to the four pen directions. Key state is level-triggered:
// a direction reads as held for every frame its key sits in the pressed
// set, regardless of press/release edges in between.

use super::{Direction, PenInput};
use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard mapping for the pen directions
#[derive(Debug, Clone)]
pub struct PenMapping {
    /// Key for moving up
    pub up: KeyCode,
    /// Key for moving down
    pub down: KeyCode,
    /// Key for moving left
    pub left: KeyCode,
    /// Key for moving right
    pub right: KeyCode,
}

impl PenMapping {
    /// Create the default arrow-key mapping
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Create a WASD mapping
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// Get the direction for a given key code
    ///
    /// # Returns
    /// Some(Direction) if the key is mapped, None otherwise
    fn get_direction(&self, key: KeyCode) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl Default for PenMapping {
    fn default() -> Self {
        Self::arrows()
    }
}

/// Keyboard input handler for the pen
///
/// Tracks the set of currently pressed keys and converts it to a pen
/// input snapshot through the configured mapping.
pub struct KeyboardHandler {
    /// Direction mapping
    mapping: PenMapping,
    /// Set of currently pressed keys
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardHandler {
    /// Create a new keyboard handler with the arrow-key mapping
    pub fn new() -> Self {
        Self {
            mapping: PenMapping::arrows(),
            pressed_keys: HashSet::new(),
        }
    }

    /// Create a keyboard handler with a custom mapping
    pub fn with_mapping(mapping: PenMapping) -> Self {
        Self {
            mapping,
            pressed_keys: HashSet::new(),
        }
    }

    /// Handle a key press event
    ///
    /// # Arguments
    /// * `physical_key` - The physical key that was pressed
    pub fn handle_key_press(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.insert(key_code);
        }
    }

    /// Handle a key release event
    ///
    /// # Arguments
    /// * `physical_key` - The physical key that was released
    pub fn handle_key_release(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.remove(&key_code);
        }
    }

    /// Check whether a direction's key is currently held
    fn is_direction_held(&self, direction: Direction) -> bool {
        self.pressed_keys
            .iter()
            .any(|&key| self.mapping.get_direction(key) == Some(direction))
    }

    /// Get the current pen input snapshot
    pub fn pen_state(&self) -> PenInput {
        PenInput {
            up: self.is_direction_held(Direction::Up),
            down: self.is_direction_held(Direction::Down),
            left: self.is_direction_held(Direction::Left),
            right: self.is_direction_held(Direction::Right),
        }
    }

    /// Get the current mapping
    pub fn mapping(&self) -> &PenMapping {
        &self.mapping
    }

    /// Replace the mapping
    ///
    /// Already pressed keys are re-interpreted under the new mapping.
    pub fn set_mapping(&mut self, mapping: PenMapping) {
        self.mapping = mapping;
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}
