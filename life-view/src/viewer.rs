//! Interactive Game of Life viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (the two generation buffers, RNG, timing) and implements
//! [`eframe::App`] to advance and draw the board each frame.

use eframe::App;
use life_core::config::{GRID_HEIGHT, GRID_WIDTH};
use life_core::grid::Generation;
use life_core::rules;
use rand::rng;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: two [`Generation`] buffers and the rule step.
/// - Timing state for fixed-interval stepping.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle input (Space reseeds the board).
/// 2. If `running` is `true` and enough time has passed, call
///    [`Viewer::step_once`].
/// 3. Render one filled rectangle per live cell of the current
///    generation.
///
/// ### Fields
/// - `current` - Generation being displayed and read by the rule step.
/// - `next` - Scratch generation the rule step writes into; swapped
///   with `current` after every step.
///
/// - `rng` - Random number generator used for (re)seeding the board.
///
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `generation` - Number of steps taken since the last (re)seed.
///
/// - `step_interval` - Target time between automatic steps (seconds).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps
///   (for display only).
pub struct Viewer {
    current: Generation,
    next: Generation,

    rng: rand::rngs::ThreadRng,

    running: bool,
    generation: u64,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with a randomized board that starts
    /// running immediately.
    ///
    /// Both generation buffers are allocated once here, sized to the
    /// fixed grid dimensions, and live for the rest of the process.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let mut current = Generation::new();
        current.randomize(&mut rng);

        Self {
            current,
            next: Generation::new(),
            rng,
            running: true,
            generation: 0,
            step_interval: 0.05,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Reseeds the board with a fresh uniformly random generation.
    ///
    /// The generation counter restarts at zero; whether the simulation
    /// is running is left unchanged.
    fn reseed(&mut self) {
        log::debug!("reseeding the board");
        self.current.randomize(&mut self.rng);
        self.generation = 0;
    }

    /// Kills every cell and pauses the simulation.
    ///
    /// This is mainly useful as a blank canvas before reseeding.
    fn clear_board(&mut self) {
        log::debug!("clearing the board");
        self.current.clear();
        self.generation = 0;
        self.running = false;
    }

    /// Advances the simulation by a single generation.
    ///
    /// The step consists of:
    /// 1. [`rules::step`] — compute the next generation into the
    ///    scratch buffer.
    /// 2. A buffer swap, after which the freshly computed generation
    ///    is the one being displayed.
    fn step_once(&mut self) {
        rules::step(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Returns the screen-space rectangle covered by the cell at
    /// `(x, y)`.
    ///
    /// The panel rectangle is tiled uniformly: the cell size is the
    /// panel size divided by the grid dimensions, so the grid always
    /// fills the drawing area exactly.
    ///
    /// ### Parameters
    /// - `x`, `y` - In-range cell coordinate.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The egui rectangle to fill for this cell.
    fn cell_rect(x: i32, y: i32, rect: egui::Rect) -> egui::Rect {
        let cell_w = rect.width() / GRID_WIDTH as f32;
        let cell_h = rect.height() / GRID_HEIGHT as f32;

        egui::Rect::from_min_size(
            egui::pos2(
                rect.min.x + x as f32 * cell_w,
                rect.min.y + y as f32 * cell_h,
            ),
            egui::vec2(cell_w, cell_h),
        )
    }

    /// Builds the top panel UI (run controls, stepping, reseeding).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.01..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reseed").clicked() {
                    self.reseed();
                }

                if ui.button("Clear").clicked() {
                    self.clear_board();
                }

                ui.separator();
                ui.label("Space reseeds the board");
            });
        });
    }

    /// Builds the bottom status bar (time step, generation, live cells).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("generation = {}", self.generation));
                ui.label(format!("live cells = {}", self.current.live_count()));
            });
        });
    }

    /// Builds the central panel where the board is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Dead cells are the background; only live cells get a fill.
            painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

            for y in 0..GRID_HEIGHT {
                for x in 0..GRID_WIDTH {
                    if self.current.get(x, y) {
                        painter.rect_filled(
                            Self::cell_rect(x, y, rect),
                            0.0,
                            egui::Color32::WHITE,
                        );
                    }
                }
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that handles input and builds all UI panels for
    /// each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.reseed();
        }

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::config::CELL_COUNT;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 800.0))
    }

    #[test]
    fn new_starts_running_with_full_buffers() {
        let viewer = Viewer::new();

        assert_eq!(viewer.current.cells.len(), CELL_COUNT);
        assert_eq!(viewer.next.cells.len(), CELL_COUNT);
        assert!(viewer.running);
        assert_eq!(viewer.generation, 0);
    }

    #[test]
    fn cell_rect_tiles_the_panel_exactly() {
        let rect = test_rect();
        let eps = 1e-3;

        let first = Viewer::cell_rect(0, 0, rect);
        let last = Viewer::cell_rect(GRID_WIDTH - 1, GRID_HEIGHT - 1, rect);

        // The first cell starts at the panel origin and the last cell
        // ends at the panel's far corner.
        assert!((first.min.x - rect.min.x).abs() < eps);
        assert!((first.min.y - rect.min.y).abs() < eps);
        assert!((last.max.x - rect.max.x).abs() < eps);
        assert!((last.max.y - rect.max.y).abs() < eps);

        // Every cell covers the same fraction of the panel.
        assert!((first.width() - rect.width() / GRID_WIDTH as f32).abs() < eps);
        assert!((first.height() - rect.height() / GRID_HEIGHT as f32).abs() < eps);
    }

    #[test]
    fn step_once_swaps_buffers_and_counts_generations() {
        let mut viewer = Viewer::new();
        viewer.current.clear();
        viewer.next.clear();

        // Vertical blinker away from the edges.
        viewer.current.set(10, 9, true);
        viewer.current.set(10, 10, true);
        viewer.current.set(10, 11, true);
        let initial = viewer.current.clone();

        viewer.step_once();

        // The horizontal phase must be visible through `current`,
        // proving the freshly computed buffer was swapped in.
        assert!(viewer.current.get(9, 10));
        assert!(viewer.current.get(10, 10));
        assert!(viewer.current.get(11, 10));
        assert!(!viewer.current.get(10, 9));

        viewer.step_once();

        assert_eq!(viewer.current, initial);
        assert_eq!(viewer.generation, 2);
    }

    #[test]
    fn reseed_restarts_the_generation_counter() {
        let mut viewer = Viewer::new();
        viewer.generation = 17;

        viewer.reseed();

        assert_eq!(viewer.generation, 0);
        assert_eq!(viewer.current.cells.len(), CELL_COUNT);
    }

    #[test]
    fn clear_board_kills_all_cells_and_pauses() {
        let mut viewer = Viewer::new();

        viewer.clear_board();

        assert!(!viewer.running);
        assert_eq!(viewer.current.live_count(), 0);
        assert_eq!(viewer.generation, 0);
    }
}
