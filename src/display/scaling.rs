// Scaling - Integer magnification and centering onto the output surface
//
// The panel image is never smoothed: the largest whole-number scale that
// fits the surface is chosen (floored at 1×) and each logical pixel
// becomes a scale×scale block, centered with the remainder split between
// the two sides.

use super::format::PixelFormat;

/// Destination placement of the panel image on the output surface
///
/// Recomputed every frame from the current surface size; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Whole-number magnification factor, always ≥ 1
    pub scale: u32,
    /// X offset of the destination rectangle (negative when the surface
    /// is narrower than the scaled image)
    pub x: i32,
    /// Y offset of the destination rectangle
    pub y: i32,
    /// Destination width in surface pixels
    pub width: u32,
    /// Destination height in surface pixels
    pub height: u32,
}

/// Compute the scale and centered destination rectangle for the panel
///
/// The scale is the largest integer that fits the logical image in the
/// surface on both axes, floored at 1: a surface smaller than the logical
/// image yields a destination rectangle larger than the surface rather
/// than a fractional scale. Centering uses truncating division, so an odd
/// remainder leaves the extra pixel on the far side.
///
/// # Arguments
/// * `output_width` - Current surface width in pixels
/// * `output_height` - Current surface height in pixels
/// * `logical_width` - Panel width in cells
/// * `logical_height` - Panel height in cells
pub fn compute_placement(
    output_width: u32,
    output_height: u32,
    logical_width: u32,
    logical_height: u32,
) -> Placement {
    let scale = (output_width / logical_width)
        .min(output_height / logical_height)
        .max(1);

    let width = logical_width * scale;
    let height = logical_height * scale;

    Placement {
        scale,
        x: (output_width as i32 - width as i32) / 2,
        y: (output_height as i32 - height as i32) / 2,
        width,
        height,
    }
}

/// Fill the surface frame with opaque black
///
/// Clears whatever the previous frame left outside the destination
/// rectangle.
pub fn clear_frame(frame: &mut [u8], format: PixelFormat) {
    let black = format.encode([0, 0, 0, 0xFF]);
    for pixel in frame.chunks_exact_mut(PixelFormat::BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&black);
    }
}

/// Nearest-neighbor blit of the composed buffer into the placement
///
/// Replicates each source pixel as a scale×scale block inside the
/// destination rectangle. The rectangle may extend past the surface on
/// any side; only the visible intersection is written.
///
/// # Arguments
/// * `src` - Composed pixel data, row-major, 4 bytes per pixel
/// * `src_width` - Source width in pixels
/// * `src_height` - Source height in pixels
/// * `placement` - Destination rectangle and scale on the surface
/// * `dst` - Surface frame, row-major, 4 bytes per pixel
/// * `dst_width` - Surface width in pixels
/// * `dst_height` - Surface height in pixels
///
/// # Panics
/// Panics if a buffer is smaller than its stated dimensions
pub fn blit_scaled(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    placement: &Placement,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
) {
    const BPP: usize = PixelFormat::BYTES_PER_PIXEL;

    assert!(src.len() >= src_width * src_height * BPP);
    assert!(dst.len() >= dst_width * dst_height * BPP);

    let scale = placement.scale as usize;

    // Visible intersection of the destination rectangle and the surface.
    let y_start = placement.y.max(0);
    let y_end = (placement.y + placement.height as i32).min(dst_height as i32);
    let x_start = placement.x.max(0);
    let x_end = (placement.x + placement.width as i32).min(dst_width as i32);

    for dy in y_start..y_end {
        let sy = (dy - placement.y) as usize / scale;
        if sy >= src_height {
            break;
        }
        let src_row = &src[sy * src_width * BPP..(sy + 1) * src_width * BPP];
        let dst_row = &mut dst[dy as usize * dst_width * BPP..(dy as usize + 1) * dst_width * BPP];

        for dx in x_start..x_end {
            let sx = (dx - placement.x) as usize / scale;
            if sx >= src_width {
                break;
            }
            dst_row[dx as usize * BPP..dx as usize * BPP + BPP]
                .copy_from_slice(&src_row[sx * BPP..sx * BPP + BPP]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let p = compute_placement(600, 400, 60, 40);
        assert_eq!(p.scale, 10);
        assert_eq!((p.width, p.height), (600, 400));
        assert_eq!((p.x, p.y), (0, 0));
    }

    #[test]
    fn test_odd_remainder_centering() {
        let p = compute_placement(301, 205, 60, 40);
        assert_eq!(p.scale, 5);
        assert_eq!((p.width, p.height), (300, 200));
        assert_eq!(p.x, 0); // remainder 1 truncates toward the near side
        assert_eq!(p.y, 2);
    }

    #[test]
    fn test_scale_floors_at_one() {
        let p = compute_placement(30, 20, 60, 40);
        assert_eq!(p.scale, 1);
        assert_eq!((p.width, p.height), (60, 40));
        // Destination exceeds the surface on both axes, centered.
        assert_eq!((p.x, p.y), (-15, -10));
    }

    #[test]
    fn test_limiting_axis_wins() {
        // Wide surface: height limits the scale.
        let p = compute_placement(6000, 120, 60, 40);
        assert_eq!(p.scale, 3);
        assert_eq!((p.x, p.y), ((6000 - 180) / 2, 0));
    }

    #[test]
    fn test_clear_frame_encodes_format() {
        let mut frame = vec![0xAA; 4 * 4];
        clear_frame(&mut frame, PixelFormat::Argb8888);
        for pixel in frame.chunks_exact(4) {
            assert_eq!(pixel, [0xFF, 0, 0, 0]);
        }
    }

    /// Helper: 2×1 source with two distinct pixels
    fn two_pixel_src() -> Vec<u8> {
        let mut src = vec![0u8; 2 * 4];
        src[..4].copy_from_slice(&[1, 1, 1, 1]);
        src[4..].copy_from_slice(&[2, 2, 2, 2]);
        src
    }

    #[test]
    fn test_blit_replicates_blocks() {
        let src = two_pixel_src();
        let mut dst = vec![0u8; 4 * 2 * 4]; // 4×2 surface
        let placement = Placement {
            scale: 2,
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };

        blit_scaled(&src, 2, 1, &placement, &mut dst, 4, 2);

        // Each source pixel becomes a 2×2 block.
        for dy in 0..2 {
            let row = &dst[dy * 16..(dy + 1) * 16];
            assert_eq!(&row[..8], [1, 1, 1, 1, 1, 1, 1, 1]);
            assert_eq!(&row[8..], [2, 2, 2, 2, 2, 2, 2, 2]);
        }
    }

    #[test]
    fn test_blit_centers_with_offset() {
        let src = vec![7u8; 4]; // single pixel
        let mut dst = vec![0u8; 3 * 3 * 4]; // 3×3 surface
        let placement = Placement {
            scale: 1,
            x: 1,
            y: 1,
            width: 1,
            height: 1,
        };

        blit_scaled(&src, 1, 1, &placement, &mut dst, 3, 3);

        for y in 0..3 {
            for x in 0..3 {
                let offset = (y * 3 + x) * 4;
                let expected = if (x, y) == (1, 1) { 7 } else { 0 };
                assert_eq!(dst[offset], expected);
            }
        }
    }

    #[test]
    fn test_blit_clips_oversized_destination() {
        // 2×1 source at scale 2 on a 2×1 surface: only the left half of
        // the destination rectangle is visible.
        let src = two_pixel_src();
        let mut dst = vec![0u8; 2 * 1 * 4];
        let placement = Placement {
            scale: 2,
            x: -1,
            y: 0,
            width: 4,
            height: 2,
        };

        blit_scaled(&src, 2, 1, &placement, &mut dst, 2, 1);

        // Surface x=0 maps to destination x=1 (still source pixel 0),
        // surface x=1 to destination x=2 (source pixel 1).
        assert_eq!(&dst[..4], [1, 1, 1, 1]);
        assert_eq!(&dst[4..], [2, 2, 2, 2]);
    }
}
