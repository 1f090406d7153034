// Unified input handler module
//
// Merges keyboard and gamepad state into a single pen input snapshot so
// either device (or both at once) can drive the pen.

use super::{GamepadHandler, InputConfig, KeyboardHandler, PenInput};
use winit::keyboard::PhysicalKey;

/// Unified input handler combining keyboard and gamepad
pub struct UnifiedInputHandler {
    /// Keyboard input handler
    keyboard_handler: KeyboardHandler,
    /// Gamepad input handler
    gamepad_handler: GamepadHandler,
}

impl UnifiedInputHandler {
    /// Create a new unified input handler with default mappings
    pub fn new() -> Self {
        Self {
            keyboard_handler: KeyboardHandler::new(),
            gamepad_handler: GamepadHandler::new(),
        }
    }

    /// Create a unified input handler from a loaded configuration
    ///
    /// # Arguments
    /// * `config` - Input configuration with keyboard and gamepad mappings
    ///
    /// # Returns
    /// Result containing the handler or an error message if a mapping
    /// names an unknown key or button
    pub fn with_config(config: &InputConfig) -> Result<Self, String> {
        let keyboard_mapping = config.keyboard.to_pen_mapping()?;
        let gamepad_mapping = config.gamepad.to_gamepad_mapping()?;

        Ok(Self {
            keyboard_handler: KeyboardHandler::with_mapping(keyboard_mapping),
            gamepad_handler: GamepadHandler::with_mapping(gamepad_mapping),
        })
    }

    /// Create a unified input handler from existing handlers
    pub fn with_handlers(
        keyboard_handler: KeyboardHandler,
        gamepad_handler: GamepadHandler,
    ) -> Self {
        Self {
            keyboard_handler,
            gamepad_handler,
        }
    }

    /// Handle a keyboard key press event
    pub fn handle_key_press(&mut self, physical_key: PhysicalKey) {
        self.keyboard_handler.handle_key_press(physical_key);
    }

    /// Handle a keyboard key release event
    pub fn handle_key_release(&mut self, physical_key: PhysicalKey) {
        self.keyboard_handler.handle_key_release(physical_key);
    }

    /// Process pending gamepad events
    pub fn update_gamepad(&mut self) {
        self.gamepad_handler.update();
    }

    /// Get the merged pen input snapshot
    ///
    /// A direction reads as held if either device holds it.
    pub fn pen_state(&self) -> PenInput {
        self.keyboard_handler
            .pen_state()
            .merge(&self.gamepad_handler.pen_state())
    }

    /// Get the keyboard handler
    pub fn keyboard_handler(&self) -> &KeyboardHandler {
        &self.keyboard_handler
    }

    /// Get the gamepad handler
    pub fn gamepad_handler(&self) -> &GamepadHandler {
        &self.gamepad_handler
    }
}

impl Default for UnifiedInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_keyboard_feeds_merged_state() {
        let mut handler = UnifiedInputHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowUp));
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowLeft));

        let state = handler.pen_state();
        assert!(state.up);
        assert!(state.left);
        assert!(!state.down);
        assert!(!state.right);
    }

    #[test]
    fn test_release_clears_merged_state() {
        let mut handler = UnifiedInputHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowUp));
        handler.handle_key_release(PhysicalKey::Code(KeyCode::ArrowUp));

        assert_eq!(handler.pen_state(), PenInput::new());
    }

    #[test]
    fn test_with_config_default_mappings() {
        let config = InputConfig::new();
        let mut handler =
            UnifiedInputHandler::with_config(&config).expect("default config should be valid");

        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowDown));
        assert!(handler.pen_state().down);
    }
}
