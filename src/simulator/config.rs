// Configuration management
//
// Handles simulator settings persistence. The panel geometry, decay
// rate, and colors are compile-time constants; only presentation and
// screenshot settings are configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default configuration file path
const CONFIG_FILE: &str = "panel_config.toml";

/// Simulator configuration
///
/// Stores all user-configurable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Initial window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target FPS
    pub fps: u32,
}

/// Screenshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotConfig {
    /// Screenshot directory
    pub screenshot_directory: PathBuf,

    /// Include timestamp in filename
    pub include_timestamp: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            video: VideoConfig {
                scale: 5,
                vsync: true,
                fps: 60,
            },
            screenshot: ScreenshotConfig {
                screenshot_directory: PathBuf::from("screenshots"),
                include_timestamp: true,
            },
        }
    }
}

impl SimulatorConfig {
    /// Load the configuration, falling back to defaults
    ///
    /// A missing or unreadable file yields the default configuration,
    /// which is written back so the user has a file to edit.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Best effort; a read-only directory just means no file.
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    ///
    /// # Returns
    ///
    /// Result containing the configuration or an error
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.video.scale, 5);
        assert_eq!(config.video.fps, 60);
        assert!(config.video.vsync);
        assert!(config.screenshot.include_timestamp);
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulatorConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: SimulatorConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(deserialized.video.scale, config.video.scale);
        assert_eq!(
            deserialized.screenshot.screenshot_directory,
            config.screenshot.screenshot_directory
        );
    }
}
