// LCD Panel Simulator Library
// Core library for the persistence panel simulation

// Public modules
pub mod display;
pub mod input;
pub mod panel;
pub mod simulator;

// Re-export main types for convenience
pub use display::{ColorLut, FrameBuffer, PixelFormat, Placement, WindowConfig};
pub use input::{Direction, InputConfig, PenInput, UnifiedInputHandler};
pub use panel::{LcdPanel, PenPosition, PANEL_HEIGHT, PANEL_WIDTH};
pub use simulator::{Simulator, SimulatorConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // Test that all components can be instantiated
        let _panel = LcdPanel::new();
        let _lut = ColorLut::new();
        let _frame_buffer = FrameBuffer::new(PixelFormat::Rgba8888);
        let _input = PenInput::new();
        let _simulator = Simulator::new();
    }
}
