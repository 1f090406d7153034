// Gamepad input mapping module
//
// Drives the pen from a connected gamepad's d-pad. The first connected
// gamepad is used; a missing gamepad subsystem only disables this
// backend, the keyboard keeps working.

use super::{Direction, PenInput};
use gilrs::{Button as GilrsButton, Event, EventType, Gilrs};

/// Gamepad mapping for the pen directions
#[derive(Debug, Clone)]
pub struct GamepadMapping {
    /// Button for moving up
    pub up: GilrsButton,
    /// Button for moving down
    pub down: GilrsButton,
    /// Button for moving left
    pub left: GilrsButton,
    /// Button for moving right
    pub right: GilrsButton,
}

impl GamepadMapping {
    /// Create the default d-pad mapping
    pub fn default_mapping() -> Self {
        Self {
            up: GilrsButton::DPadUp,
            down: GilrsButton::DPadDown,
            left: GilrsButton::DPadLeft,
            right: GilrsButton::DPadRight,
        }
    }

    /// Get the direction for a given gamepad button
    ///
    /// # Returns
    /// Some(Direction) if the button is mapped, None otherwise
    fn get_direction(&self, button: GilrsButton) -> Option<Direction> {
        if button == self.up {
            Some(Direction::Up)
        } else if button == self.down {
            Some(Direction::Down)
        } else if button == self.left {
            Some(Direction::Left)
        } else if button == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl Default for GamepadMapping {
    fn default() -> Self {
        Self::default_mapping()
    }
}

/// Gamepad input handler for the pen
///
/// Polls gilrs events and maintains a level-triggered direction state.
pub struct GamepadHandler {
    /// Gilrs instance for gamepad events, None if initialization failed
    gilrs: Option<Gilrs>,
    /// Direction mapping
    mapping: GamepadMapping,
    /// Current held-direction state
    state: PenInput,
}

impl GamepadHandler {
    /// Create a new gamepad handler with the d-pad mapping
    ///
    /// If the gamepad subsystem cannot be initialized, the handler is
    /// created in a disabled state and reports no input.
    pub fn new() -> Self {
        Self::with_mapping(GamepadMapping::default_mapping())
    }

    /// Create a gamepad handler with a custom mapping
    pub fn with_mapping(mapping: GamepadMapping) -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (id, gamepad) in gilrs.gamepads() {
                    println!("Gamepad '{}' (ID: {}) connected", gamepad.name(), id);
                }
                Some(gilrs)
            }
            Err(e) => {
                eprintln!("Gamepad support unavailable: {}", e);
                None
            }
        };

        Self {
            gilrs,
            mapping,
            state: PenInput::new(),
        }
    }

    /// Process pending gamepad events
    ///
    /// Call once per frame before taking the input snapshot.
    pub fn update(&mut self) {
        let Some(gilrs) = &mut self.gilrs else {
            return;
        };

        while let Some(Event { event, .. }) = gilrs.next_event() {
            match event {
                EventType::ButtonPressed(button, _) => {
                    if let Some(direction) = self.mapping.get_direction(button) {
                        self.state.set(direction, true);
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(direction) = self.mapping.get_direction(button) {
                        self.state.set(direction, false);
                    }
                }
                EventType::Disconnected => {
                    // Do not leave directions stuck held.
                    self.state = PenInput::new();
                }
                _ => {}
            }
        }
    }

    /// Get the current pen input snapshot
    pub fn pen_state(&self) -> PenInput {
        self.state
    }

    /// Get the current mapping
    pub fn mapping(&self) -> &GamepadMapping {
        &self.mapping
    }

    /// Replace the mapping
    pub fn set_mapping(&mut self, mapping: GamepadMapping) {
        self.mapping = mapping;
        self.state = PenInput::new();
    }

    /// Whether the gamepad subsystem is available
    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }
}

impl Default for GamepadHandler {
    fn default() -> Self {
        Self::new()
    }
}
