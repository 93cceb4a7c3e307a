//! Application entry point for the toroidal Game of Life viewer.
//!
//! This binary sets up eframe/egui and delegates simulation control
//! and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use eframe::egui;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// This function initializes logging, configures
/// [`eframe::NativeOptions`] with a square window, and launches the
/// main window titled `"Game of Life"`. All simulation state and
/// rendering are handled by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Game of Life on a toroidal grid");
    log::info!("Controls:");
    log::info!("  Space - Reseed the board");
    log::info!("  Use the top panel to pause, step, reseed or clear.");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
