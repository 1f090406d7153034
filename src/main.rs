// LCD Panel Simulator - Main Entry Point
//
// Opens the panel window and hands the frame loop to the display module.
// The pen is driven with the arrow keys or a gamepad d-pad; F9 saves a
// screenshot.

use lcd_rs::display::{run_display, WindowConfig};
use lcd_rs::input::InputConfig;
use lcd_rs::simulator::{Simulator, SimulatorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("LCD Panel Simulator (lcd-rs) v0.1.0");
    println!("===================================");
    println!();

    // Load or create the simulator configuration
    let sim_config = SimulatorConfig::load_or_default();

    // Load or create the input configuration
    let input_config_path = "input_config.toml";
    let input_config = InputConfig::load_or_default(input_config_path);
    println!("Input configuration loaded from '{}'", input_config_path);
    println!();

    let window_config = WindowConfig::new()
        .with_scale(sim_config.video.scale)
        .with_fps(sim_config.video.fps)
        .with_vsync(sim_config.video.vsync);

    let simulator = Simulator::with_config(sim_config);

    println!("Arrow keys / d-pad move the pen, F9 saves a screenshot.");
    println!("Press the close button or Ctrl+C to exit.");
    println!();

    run_display(window_config, simulator, Some(&input_config))?;

    println!("Panel window closed.");
    Ok(())
}
