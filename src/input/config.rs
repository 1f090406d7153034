// Input configuration module
//
// Save and load input mappings (keyboard and gamepad) to/from TOML files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use winit::keyboard::KeyCode;

/// Serializable keyboard direction mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardMappingConfig {
    /// Key for moving up (as string, e.g., "ArrowUp")
    pub up: String,
    /// Key for moving down
    pub down: String,
    /// Key for moving left
    pub left: String,
    /// Key for moving right
    pub right: String,
}

impl KeyboardMappingConfig {
    /// Create the default arrow-key mapping
    pub fn arrows_default() -> Self {
        Self {
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
        }
    }

    /// Convert to a runtime PenMapping
    ///
    /// # Returns
    /// Result containing PenMapping or an error message naming the
    /// unknown key
    pub fn to_pen_mapping(&self) -> Result<super::PenMapping, String> {
        Ok(super::PenMapping {
            up: string_to_keycode(&self.up)?,
            down: string_to_keycode(&self.down)?,
            left: string_to_keycode(&self.left)?,
            right: string_to_keycode(&self.right)?,
        })
    }

    /// Create from a runtime PenMapping
    pub fn from_pen_mapping(mapping: &super::PenMapping) -> Self {
        Self {
            up: keycode_to_string(mapping.up),
            down: keycode_to_string(mapping.down),
            left: keycode_to_string(mapping.left),
            right: keycode_to_string(mapping.right),
        }
    }
}

/// Serializable gamepad direction mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamepadMappingConfig {
    /// Button for moving up (as string, e.g., "DPadUp")
    pub up: String,
    /// Button for moving down
    pub down: String,
    /// Button for moving left
    pub left: String,
    /// Button for moving right
    pub right: String,
}

impl GamepadMappingConfig {
    /// Create the default d-pad mapping
    pub fn default_mapping() -> Self {
        Self {
            up: "DPadUp".to_string(),
            down: "DPadDown".to_string(),
            left: "DPadLeft".to_string(),
            right: "DPadRight".to_string(),
        }
    }

    /// Convert to a runtime GamepadMapping
    ///
    /// # Returns
    /// Result containing GamepadMapping or an error message naming the
    /// unknown button
    pub fn to_gamepad_mapping(&self) -> Result<super::GamepadMapping, String> {
        Ok(super::GamepadMapping {
            up: string_to_gilrs_button(&self.up)?,
            down: string_to_gilrs_button(&self.down)?,
            left: string_to_gilrs_button(&self.left)?,
            right: string_to_gilrs_button(&self.right)?,
        })
    }

    /// Create from a runtime GamepadMapping
    pub fn from_gamepad_mapping(mapping: &super::GamepadMapping) -> Self {
        Self {
            up: gilrs_button_to_string(mapping.up),
            down: gilrs_button_to_string(mapping.down),
            left: gilrs_button_to_string(mapping.left),
            right: gilrs_button_to_string(mapping.right),
        }
    }
}

/// Complete input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keyboard mapping for the pen
    pub keyboard: KeyboardMappingConfig,
    /// Gamepad mapping for the pen
    pub gamepad: GamepadMappingConfig,
}

impl InputConfig {
    /// Create a new input configuration with default mappings
    pub fn new() -> Self {
        Self {
            keyboard: KeyboardMappingConfig::arrows_default(),
            gamepad: GamepadMappingConfig::default_mapping(),
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// Result containing InputConfig or error message
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: InputConfig = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    ///
    /// # Arguments
    /// * `path` - Path where the TOML configuration file will be saved
    ///
    /// # Returns
    /// Result indicating success or error message
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_string).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Try to load configuration from file, or create default if it doesn't exist
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// InputConfig (either loaded or default)
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(&path).unwrap_or_else(|e| {
            eprintln!("Could not load input config ({}), using defaults", e);
            let config = Self::new();
            // Write the defaults back so the user has a file to edit.
            if let Err(e) = config.save_to_file(&path) {
                eprintln!("Warning: could not save default input config: {}", e);
            } else {
                println!("Created default input configuration file");
            }
            config
        })
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert KeyCode to string representation
fn keycode_to_string(key: KeyCode) -> String {
    format!("{:?}", key)
}

/// Convert string to KeyCode
///
/// Handles the keys a pen mapping plausibly uses; unknown names are
/// rejected with an error naming them.
fn string_to_keycode(s: &str) -> Result<KeyCode, String> {
    match s {
        "KeyA" => Ok(KeyCode::KeyA),
        "KeyB" => Ok(KeyCode::KeyB),
        "KeyC" => Ok(KeyCode::KeyC),
        "KeyD" => Ok(KeyCode::KeyD),
        "KeyE" => Ok(KeyCode::KeyE),
        "KeyF" => Ok(KeyCode::KeyF),
        "KeyG" => Ok(KeyCode::KeyG),
        "KeyH" => Ok(KeyCode::KeyH),
        "KeyI" => Ok(KeyCode::KeyI),
        "KeyJ" => Ok(KeyCode::KeyJ),
        "KeyK" => Ok(KeyCode::KeyK),
        "KeyL" => Ok(KeyCode::KeyL),
        "KeyM" => Ok(KeyCode::KeyM),
        "KeyN" => Ok(KeyCode::KeyN),
        "KeyO" => Ok(KeyCode::KeyO),
        "KeyP" => Ok(KeyCode::KeyP),
        "KeyQ" => Ok(KeyCode::KeyQ),
        "KeyR" => Ok(KeyCode::KeyR),
        "KeyS" => Ok(KeyCode::KeyS),
        "KeyT" => Ok(KeyCode::KeyT),
        "KeyU" => Ok(KeyCode::KeyU),
        "KeyV" => Ok(KeyCode::KeyV),
        "KeyW" => Ok(KeyCode::KeyW),
        "KeyX" => Ok(KeyCode::KeyX),
        "KeyY" => Ok(KeyCode::KeyY),
        "KeyZ" => Ok(KeyCode::KeyZ),
        "ArrowUp" => Ok(KeyCode::ArrowUp),
        "ArrowDown" => Ok(KeyCode::ArrowDown),
        "ArrowLeft" => Ok(KeyCode::ArrowLeft),
        "ArrowRight" => Ok(KeyCode::ArrowRight),
        "Space" => Ok(KeyCode::Space),
        "Enter" => Ok(KeyCode::Enter),
        "Tab" => Ok(KeyCode::Tab),
        "Escape" => Ok(KeyCode::Escape),
        "Backspace" => Ok(KeyCode::Backspace),
        "ShiftLeft" => Ok(KeyCode::ShiftLeft),
        "ShiftRight" => Ok(KeyCode::ShiftRight),
        "ControlLeft" => Ok(KeyCode::ControlLeft),
        "ControlRight" => Ok(KeyCode::ControlRight),
        "Numpad2" => Ok(KeyCode::Numpad2),
        "Numpad4" => Ok(KeyCode::Numpad4),
        "Numpad6" => Ok(KeyCode::Numpad6),
        "Numpad8" => Ok(KeyCode::Numpad8),
        _ => Err(format!("Unknown key code: {}", s)),
    }
}

/// Convert gilrs Button to string representation
fn gilrs_button_to_string(button: gilrs::Button) -> String {
    format!("{:?}", button)
}

/// Convert string to gilrs Button
fn string_to_gilrs_button(s: &str) -> Result<gilrs::Button, String> {
    use gilrs::Button;

    match s {
        "South" => Ok(Button::South),
        "East" => Ok(Button::East),
        "North" => Ok(Button::North),
        "West" => Ok(Button::West),
        "Select" => Ok(Button::Select),
        "Start" => Ok(Button::Start),
        "DPadUp" => Ok(Button::DPadUp),
        "DPadDown" => Ok(Button::DPadDown),
        "DPadLeft" => Ok(Button::DPadLeft),
        "DPadRight" => Ok(Button::DPadRight),
        "LeftThumb" => Ok(Button::LeftThumb),
        "RightThumb" => Ok(Button::RightThumb),
        _ => Err(format!("Unknown gamepad button: {}", s)),
    }
}
