// Panel constants

/// Panel width in cells
pub const PANEL_WIDTH: usize = 60;

/// Panel height in cells
pub const PANEL_HEIGHT: usize = 40;

/// Total number of cells in the panel
pub const PANEL_SIZE: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// Brightness decay rate in normalized units per second
///
/// A freshly plotted cell (brightness 1.0) fades to fully unlit in
/// `1.0 / PANEL_DECAY_RATE` seconds of elapsed time.
pub const PANEL_DECAY_RATE: f64 = 10.0;
