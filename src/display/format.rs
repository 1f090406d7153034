// Pixel format descriptors
//
// The compositor writes whatever byte layout the presentation surface
// expects. Each format describes the channel order of a 4-byte pixel;
// encoding is a pure reordering of the [R, G, B, A] quadruple.

/// Byte layout of a 32-bit pixel on the destination surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// R, G, B, A byte order (the layout the pixels crate surface uses)
    Rgba8888,
    /// B, G, R, A byte order
    Bgra8888,
    /// A, R, G, B byte order
    Argb8888,
    /// A, B, G, R byte order
    Abgr8888,
}

impl PixelFormat {
    /// Bytes per pixel for all supported formats
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Encode an [R, G, B, A] quadruple into this format's byte order
    #[inline]
    pub fn encode(&self, rgba: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = rgba;
        match self {
            PixelFormat::Rgba8888 => [r, g, b, a],
            PixelFormat::Bgra8888 => [b, g, r, a],
            PixelFormat::Argb8888 => [a, r, g, b],
            PixelFormat::Abgr8888 => [a, b, g, r],
        }
    }

    /// Decode a pixel in this format back to [R, G, B, A]
    #[inline]
    pub fn decode(&self, bytes: [u8; 4]) -> [u8; 4] {
        let [b0, b1, b2, b3] = bytes;
        match self {
            PixelFormat::Rgba8888 => [b0, b1, b2, b3],
            PixelFormat::Bgra8888 => [b2, b1, b0, b3],
            PixelFormat::Argb8888 => [b1, b2, b3, b0],
            PixelFormat::Abgr8888 => [b3, b2, b1, b0],
        }
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::Rgba8888
    }
}
