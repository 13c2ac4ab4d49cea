// ui.rs - eframe front end: pointer input, frame pacing and painting the board

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use life_core::{Canvas, GenerationClock, GridEngine, Rgb};
use log::{error, info};

pub const FRAME_RATE: u32 = 20;             // Board frames per second
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

pub struct LifeApp {
    engine          : GridEngine,
    clock           : GenerationClock,
    canvas          : Canvas,
    last_update     : Instant,
    update_interval : Duration,
    alive_color     : Color32,
    dead_color      : Color32,
}

impl LifeApp {
    pub fn new(engine: GridEngine) -> Self {
        let palette = *engine.palette();
        let canvas = Canvas::new(engine.grid_size(), engine.square_side(), palette.dead);
        Self {
            engine,
            clock: GenerationClock::default(),
            canvas,
            last_update: Instant::now(),
            update_interval: Duration::from_secs_f64(1.0 / FRAME_RATE as f64),
            alive_color: to_color32(palette.alive),
            dead_color: to_color32(palette.dead),
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let total = self.engine.grid_size() * self.engine.grid_size();
            let live_cells = self.engine.population();

            ui.label(format!("Generation: {}", self.engine.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            ui.separator();

            // Recolors apply from each cell's next transition
            ui.label("Alive:");
            let alive_changed = ui.color_edit_button_srgba(&mut self.alive_color).changed();
            ui.label("Dead:");
            let dead_changed = ui.color_edit_button_srgba(&mut self.dead_color).changed();
            if alive_changed || dead_changed {
                let mut palette = *self.engine.palette();
                palette.alive = to_rgb(self.alive_color);
                palette.dead = to_rgb(self.dead_color);
                self.engine.set_palette(palette);
            }

            ui.separator();
            if ui.button("⏹ Quit").clicked() {
                self.engine.stop();
            }
        });
    }

    /// Escape and the window's close button both end play
    fn quit_on(&mut self, escape: bool, close_requested: bool) {
        if escape || close_requested {
            self.engine.stop();
        }
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.engine.dimensions();
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, height), egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Holding the button paints cells alive and pauses the board
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = board_point(pos - origin, width, height);
                self.engine.handle_click(&mut self.clock, x, y, &mut self.canvas);
            }
        } else if self.last_update.elapsed() >= self.update_interval {
            if let Err(err) = self.engine.render_frame(&mut self.clock, &mut self.canvas) {
                error!("Stopping: {}", err);
                self.engine.stop();
            }
            self.last_update = Instant::now();
        }

        for (square, color) in self.canvas.squares() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(square.x, square.y),
                Vec2::new(square.width, square.height),
            );
            painter.rect_filled(rect, 0.0, to_color32(color));
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (escape, close) = ctx.input(|i| {
            (i.key_pressed(egui::Key::Escape), i.viewport().close_requested())
        });
        self.quit_on(escape, close);

        egui::TopBottomPanel::bottom("status")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.board(ui));

        if !self.engine.is_playing() {
            info!("Quit after {} generations", self.engine.generation());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Keep animating even when no input arrives
        ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
    }
}

/// Pointer offset from the board origin, clamped onto the board
fn board_point(offset: Vec2, width: f32, height: f32) -> (f32, f32) {
    let x = offset.x.clamp(0.0, width.max(1.0) - 1.0);
    let y = offset.y.clamp(0.0, height.max(1.0) - 1.0);
    (x, y)
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

fn to_rgb(color: Color32) -> Rgb {
    Rgb(color.r(), color.g(), color.b())
}
