// Simulator - Owns the simulation context and runs one tick per frame
//
// Bundles the panel and the color table into a single context object
// that the presentation layer drives: one `run_frame` per displayed
// frame, in the fixed order decay → pen move → plot.

pub mod config;
pub mod screenshot;

pub use config::{ScreenshotConfig, SimulatorConfig, VideoConfig};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::display::lut::ColorLut;
use crate::input::PenInput;
use crate::panel::LcdPanel;
use std::path::PathBuf;

/// Simulation context: panel state plus the precomputed color table
pub struct Simulator {
    /// The simulated panel
    panel: LcdPanel,
    /// Brightness→color table, built once at construction
    lut: ColorLut,
    /// Loaded settings
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with default settings
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Create a simulator with the given settings
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            panel: LcdPanel::new(),
            lut: ColorLut::new(),
            config,
        }
    }

    /// Run one frame of simulation
    ///
    /// # Arguments
    /// * `elapsed` - Time since the previous frame in seconds
    /// * `input` - Snapshot of the held pen directions
    pub fn run_frame(&mut self, elapsed: f64, input: &PenInput) {
        self.panel.advance(elapsed, input);
    }

    /// Get the panel
    pub fn panel(&self) -> &LcdPanel {
        &self.panel
    }

    /// Get mutable access to the panel
    pub fn panel_mut(&mut self) -> &mut LcdPanel {
        &mut self.panel
    }

    /// Get the color table
    pub fn lut(&self) -> &ColorLut {
        &self.lut
    }

    /// Get the loaded settings
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Save a screenshot of the current panel state
    ///
    /// # Returns
    /// Result containing the path of the written PNG or an error
    pub fn save_screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(self.panel.cells(), &self.lut, &self.config.screenshot)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
