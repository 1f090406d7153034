// Display module - Handles color mapping, composition, and presentation
//
// This module provides:
// - Brightness→color table (256 entries, quadratic interpolation)
// - Pixel format descriptors for the destination surface
// - Frame buffer composition at panel resolution (60×40)
// - Integer scaling and centering onto the window surface
// - Window creation and frame rendering using winit + pixels

pub mod format;
pub mod framebuffer;
pub mod lut;
pub mod scaling;
pub mod window;

pub use format::PixelFormat;
pub use framebuffer::FrameBuffer;
pub use lut::{ColorLut, COLOR_LIT, COLOR_UNLIT};
pub use scaling::{blit_scaled, clear_frame, compute_placement, Placement};
pub use window::{run_display, PanelWindow, WindowConfig};
