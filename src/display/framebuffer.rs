// Frame buffer - Composes the panel into presentable pixel data
//
// Projects the 60×40 brightness grid through the color table into a
// buffer of packed pixels in the destination surface's byte layout.
// Geometry is preserved exactly (cell i becomes pixel i); scaling happens
// later, at presentation time.

use super::format::PixelFormat;
use super::lut::{argb_to_channels, ColorLut};
use crate::panel::{LcdPanel, PANEL_HEIGHT, PANEL_SIZE, PANEL_WIDTH};

/// Composed pixel buffer at panel resolution
///
/// Holds one 4-byte pixel per panel cell, encoded for a specific
/// destination format. The buffer is reused across frames.
pub struct FrameBuffer {
    /// Destination byte layout
    format: PixelFormat,
    /// Packed pixel data, row-major, 4 bytes per cell
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Create a frame buffer for the given destination format
    ///
    /// All pixels start as zero bytes; `compose` overwrites every pixel.
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            pixels: vec![0; PANEL_SIZE * PixelFormat::BYTES_PER_PIXEL],
        }
    }

    /// Compose the panel through the color table into this buffer
    ///
    /// For each cell in row-major order: look up the packed color for its
    /// brightness, decompose it into channels, and re-encode the channels
    /// in the destination format at the matching pixel.
    ///
    /// # Arguments
    /// * `panel` - The panel whose brightness grid to project
    /// * `lut` - The brightness→color table
    pub fn compose(&mut self, panel: &LcdPanel, lut: &ColorLut) {
        for (cell, pixel) in panel
            .cells()
            .iter()
            .zip(self.pixels.chunks_exact_mut(PixelFormat::BYTES_PER_PIXEL))
        {
            let rgba = argb_to_channels(lut.color(*cell));
            pixel.copy_from_slice(&self.format.encode(rgba));
        }
    }

    /// Get the destination format this buffer encodes
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get the packed pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Get one pixel decoded back to [R, G, B, A]
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < PANEL_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < PANEL_HEIGHT, "Y coordinate {} out of bounds", y);

        let offset = (y * PANEL_WIDTH + x) * PixelFormat::BYTES_PER_PIXEL;
        let bytes = [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ];
        self.format.decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::lut::{COLOR_LIT, COLOR_UNLIT};
    use crate::input::PenInput;

    #[test]
    fn test_framebuffer_size() {
        let fb = FrameBuffer::new(PixelFormat::Rgba8888);
        assert_eq!(fb.as_bytes().len(), PANEL_SIZE * 4);
    }

    #[test]
    fn test_compose_unlit_panel() {
        let panel = LcdPanel::new();
        let lut = ColorLut::new();
        let mut fb = FrameBuffer::new(PixelFormat::Rgba8888);

        fb.compose(&panel, &lut);

        let expected = argb_to_channels(COLOR_UNLIT);
        assert_eq!(fb.pixel(0, 0), expected);
        assert_eq!(fb.pixel(PANEL_WIDTH - 1, PANEL_HEIGHT - 1), expected);
    }

    #[test]
    fn test_compose_plotted_cell() {
        let mut panel = LcdPanel::new();
        panel.set_pen(12, 7);
        panel.advance(0.0, &PenInput::new());

        let lut = ColorLut::new();
        let mut fb = FrameBuffer::new(PixelFormat::Rgba8888);
        fb.compose(&panel, &lut);

        assert_eq!(fb.pixel(12, 7), argb_to_channels(COLOR_LIT));
        assert_eq!(fb.pixel(0, 0), argb_to_channels(COLOR_UNLIT));
    }

    #[test]
    fn test_compose_respects_format() {
        let mut panel = LcdPanel::new();
        panel.set_pen(0, 0);
        panel.advance(0.0, &PenInput::new());

        let lut = ColorLut::new();
        let mut rgba = FrameBuffer::new(PixelFormat::Rgba8888);
        let mut bgra = FrameBuffer::new(PixelFormat::Bgra8888);
        rgba.compose(&panel, &lut);
        bgra.compose(&panel, &lut);

        // Same decoded channels, different byte order on the wire.
        assert_eq!(rgba.pixel(0, 0), bgra.pixel(0, 0));
        let head_rgba = &rgba.as_bytes()[..4];
        let head_bgra = &bgra.as_bytes()[..4];
        assert_eq!(head_rgba[0], head_bgra[2]);
        assert_eq!(head_rgba[2], head_bgra[0]);
    }

    #[test]
    fn test_compose_overwrites_previous_frame() {
        let mut panel = LcdPanel::new();
        panel.set_pen(5, 5);
        panel.advance(0.0, &PenInput::new());

        let lut = ColorLut::new();
        let mut fb = FrameBuffer::new(PixelFormat::Rgba8888);
        fb.compose(&panel, &lut);
        assert_eq!(fb.pixel(5, 5), argb_to_channels(COLOR_LIT));

        // A fully decayed grid leaves no trace of the old frame.
        panel.reset();
        fb.compose(&panel, &lut);
        assert_eq!(fb.pixel(5, 5), argb_to_channels(COLOR_UNLIT));
    }
}
