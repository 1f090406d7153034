// Window module - Manages display window and rendering
//
// Window creation, per-frame simulation stepping, and presentation using
// the winit and pixels crates. The pixels buffer tracks the surface size;
// the panel image is scaled and centered into it by the scaling module.

use super::format::PixelFormat;
use super::framebuffer::FrameBuffer;
use super::scaling::{blit_scaled, clear_frame, compute_placement};
use crate::input::{InputConfig, UnifiedInputHandler};
use crate::panel::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::simulator::Simulator;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Key that saves a screenshot of the current panel
const SCREENSHOT_KEY: KeyCode = KeyCode::F9;

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Initial scale factor (1x-8x)
    pub scale: u32,
    /// Target frame rate in Hz
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 5x scale, 60 FPS, VSync enabled
    pub fn new() -> Self {
        Self {
            scale: 5,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Set the initial scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8); // Clamp between 1x and 8x
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Get the initial window width in pixels
    pub fn window_width(&self) -> u32 {
        PANEL_WIDTH as u32 * self.scale
    }

    /// Get the initial window height in pixels
    pub fn window_height(&self) -> u32 {
        PANEL_HEIGHT as u32 * self.scale
    }

    /// Get the frame duration for the target FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Display window for the panel simulation
pub struct PanelWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    simulator: Simulator,
    frame_buffer: FrameBuffer,
    surface_size: (u32, u32),
    last_frame_time: Instant,
    last_update: Instant,
    input_handler: UnifiedInputHandler,
}

impl PanelWindow {
    /// Create a new panel window (the window itself is created when the
    /// event loop starts)
    pub fn new(config: WindowConfig, simulator: Simulator) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            simulator,
            // The pixels surface consumes RGBA byte order.
            frame_buffer: FrameBuffer::new(PixelFormat::Rgba8888),
            surface_size: (config.window_width(), config.window_height()),
            last_frame_time: Instant::now(),
            last_update: Instant::now(),
            input_handler: UnifiedInputHandler::new(),
        }
    }

    /// Create a new panel window with custom input configuration
    ///
    /// # Arguments
    /// * `config` - Window configuration
    /// * `simulator` - Simulation context to drive
    /// * `input_config` - Input configuration for keyboard and gamepad mappings
    ///
    /// # Returns
    /// Result containing PanelWindow or error message if the input config
    /// is invalid
    pub fn with_input_config(
        config: WindowConfig,
        simulator: Simulator,
        input_config: &InputConfig,
    ) -> Result<Self, String> {
        let input_handler = UnifiedInputHandler::with_config(input_config)?;

        Ok(Self {
            window: None,
            pixels: None,
            config,
            simulator,
            frame_buffer: FrameBuffer::new(PixelFormat::Rgba8888),
            surface_size: (config.window_width(), config.window_height()),
            last_frame_time: Instant::now(),
            last_update: Instant::now(),
            input_handler,
        })
    }

    /// Get a reference to the simulator
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Get a reference to the input handler
    pub fn input_handler(&self) -> &UnifiedInputHandler {
        &self.input_handler
    }

    /// Run one simulation tick and present the result
    fn advance_and_render(&mut self) -> Result<(), pixels::Error> {
        // Snapshot the held directions, then measure the tick length.
        self.input_handler.update_gamepad();
        let input = self.input_handler.pen_state();

        let elapsed = self.last_update.elapsed().as_secs_f64();
        self.last_update = Instant::now();

        self.simulator.run_frame(elapsed, &input);

        if let Some(pixels) = &mut self.pixels {
            self.frame_buffer
                .compose(self.simulator.panel(), self.simulator.lut());

            let (width, height) = self.surface_size;
            let placement =
                compute_placement(width, height, PANEL_WIDTH as u32, PANEL_HEIGHT as u32);

            let format = self.frame_buffer.format();
            let frame = pixels.frame_mut();
            clear_frame(frame, format);
            blit_scaled(
                self.frame_buffer.as_bytes(),
                PANEL_WIDTH,
                PANEL_HEIGHT,
                &placement,
                frame,
                width as usize,
                height as usize,
            );

            pixels.render()?;
        }

        Ok(())
    }

    /// True once the frame budget for the target FPS has elapsed
    fn should_render_frame(&mut self) -> bool {
        let elapsed = self.last_frame_time.elapsed();
        let frame_duration = self.config.frame_duration();

        if elapsed >= frame_duration {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    /// Resize the surface and its backing buffer to the new window size
    fn resize(&mut self, width: u32, height: u32, event_loop: &ActiveEventLoop) {
        if width == 0 || height == 0 {
            return; // minimized
        }

        if let Some(pixels) = &mut self.pixels {
            if let Err(err) = pixels.resize_surface(width, height) {
                eprintln!("Failed to resize surface: {}", err);
                event_loop.exit();
                return;
            }
            if let Err(err) = pixels.resize_buffer(width, height) {
                eprintln!("Failed to resize buffer: {}", err);
                event_loop.exit();
                return;
            }
        }

        self.surface_size = (width, height);
    }
}

impl ApplicationHandler for PanelWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(format!("LCD Panel - {}x{}", PANEL_WIDTH, PANEL_HEIGHT))
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_min_inner_size(LogicalSize::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32))
            .with_resizable(true);

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");

        // The surface borrows the window; Arc keeps it alive for 'static.
        let window = Arc::new(window);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        // The buffer matches the surface; the scaling module places the
        // panel image inside it each frame.
        let pixels = Pixels::new(window_size.width, window_size.height, surface_texture)
            .expect("Failed to create pixel buffer");

        self.surface_size = (window_size.width, window_size.height);
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                println!("Close requested, shutting down...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height, event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    if physical_key == PhysicalKey::Code(SCREENSHOT_KEY) && !repeat {
                        match self.simulator.save_screenshot() {
                            Ok(path) => println!("Screenshot saved to: {}", path.display()),
                            Err(err) => eprintln!("Failed to save screenshot: {}", err),
                        }
                    }
                    self.input_handler.handle_key_press(physical_key);
                }
                ElementState::Released => {
                    self.input_handler.handle_key_release(physical_key);
                }
            },
            WindowEvent::RedrawRequested => {
                // Simulate and render if enough time has passed
                if self.should_render_frame() {
                    if let Err(err) = self.advance_and_render() {
                        eprintln!("Render error: {}", err);
                        event_loop.exit();
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Poll gamepad events between frames
        self.input_handler.update_gamepad();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create and run the panel window
///
/// # Arguments
/// * `config` - Window configuration
/// * `simulator` - Simulation context to drive
/// * `input_config` - Optional input configuration for custom mappings
///
/// # Returns
/// Result indicating success or error
pub fn run_display(
    config: WindowConfig,
    simulator: Simulator,
    input_config: Option<&InputConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    // Set control flow based on VSync setting
    if config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    let mut display = if let Some(input_cfg) = input_config {
        PanelWindow::with_input_config(config, simulator, input_cfg)
            .map_err(|e| format!("Failed to apply input configuration: {}", e))?
    } else {
        PanelWindow::new(config, simulator)
    };

    println!("Opening panel window...");
    println!("  Panel: {}x{} cells", PANEL_WIDTH, PANEL_HEIGHT);
    println!(
        "  Window: {}x{} ({}x scale)",
        config.window_width(),
        config.window_height(),
        config.scale
    );
    println!(
        "  Target FPS: {} (vsync {})",
        config.target_fps,
        if config.vsync { "on" } else { "off" }
    );

    event_loop.run_app(&mut display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 5);
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new()
            .with_scale(2)
            .with_fps(30)
            .with_vsync(false);

        assert_eq!(config.scale, 2);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
    }

    #[test]
    fn test_window_dimensions() {
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(), 120);
        assert_eq!(config.window_height(), 80);
    }

    #[test]
    fn test_frame_duration() {
        let config = WindowConfig::new().with_fps(60);
        let duration = config.frame_duration();
        assert_eq!(duration.as_micros(), 16666); // ~16.67ms for 60 FPS
    }

    #[test]
    fn test_scale_clamping() {
        let config = WindowConfig::new().with_scale(100);
        assert_eq!(config.scale, 8); // Should be clamped to max 8x

        let config = WindowConfig::new().with_scale(0);
        assert_eq!(config.scale, 1); // Should be clamped to min 1x
    }
}
