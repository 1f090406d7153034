// Screenshot functionality
//
// Captures the current panel and saves it as a PNG file.

use crate::display::lut::{argb_to_channels, ColorLut};
use crate::panel::{PANEL_HEIGHT, PANEL_WIDTH};
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::config::ScreenshotConfig;

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a screenshot of the current panel
///
/// Maps the brightness grid through the color table to RGB and writes a
/// PNG at panel resolution into the configured directory.
///
/// # Arguments
///
/// * `cells` - The panel brightness values (60×40, row-major)
/// * `lut` - The brightness→color table
/// * `config` - Screenshot settings (directory, filename style)
///
/// # Returns
///
/// Result containing the path to the saved screenshot or an error
pub fn save_screenshot(
    cells: &[u8],
    lut: &ColorLut,
    config: &ScreenshotConfig,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(&config.screenshot_directory)?;

    let filename = if config.include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("panel_{}.png", timestamp)
    } else {
        "panel.png".to_string()
    };
    let file_path = config.screenshot_directory.join(filename);

    let rgb_data = brightness_to_rgb(cells, lut);
    save_png(
        &file_path,
        &rgb_data,
        PANEL_WIDTH as u32,
        PANEL_HEIGHT as u32,
    )?;

    Ok(file_path)
}

/// Convert brightness values to RGB data through the color table
///
/// # Arguments
///
/// * `cells` - Brightness values (one byte per cell)
/// * `lut` - The brightness→color table
///
/// # Returns
///
/// RGB888 data (3 bytes per cell)
fn brightness_to_rgb(cells: &[u8], lut: &ColorLut) -> Vec<u8> {
    let mut rgb_data = Vec::with_capacity(cells.len() * 3);

    for &brightness in cells {
        let [r, g, b, _] = argb_to_channels(lut.color(brightness));
        rgb_data.push(r);
        rgb_data.push(g);
        rgb_data.push(b);
    }

    rgb_data
}

/// Write RGB data as a PNG file
fn save_png(path: &Path, rgb_data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(rgb_data)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::lut::{COLOR_LIT, COLOR_UNLIT};
    use crate::panel::PANEL_SIZE;

    #[test]
    fn test_brightness_to_rgb_size() {
        let cells = vec![0u8; PANEL_SIZE];
        let lut = ColorLut::new();
        let rgb = brightness_to_rgb(&cells, &lut);
        assert_eq!(rgb.len(), PANEL_SIZE * 3);
    }

    #[test]
    fn test_brightness_to_rgb_endpoints() {
        let lut = ColorLut::new();

        let rgb = brightness_to_rgb(&[0], &lut);
        let [r, g, b, _] = argb_to_channels(COLOR_UNLIT);
        assert_eq!(rgb, vec![r, g, b]);

        let rgb = brightness_to_rgb(&[255], &lut);
        let [r, g, b, _] = argb_to_channels(COLOR_LIT);
        assert_eq!(rgb, vec![r, g, b]);
    }
}
