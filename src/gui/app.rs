use super::{Config, FpsLimiter};
use crate::{Seeding, Session};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};

pub struct App {
    pub(super) session: Session,         // Grid, boundary policy and run state.
    pub(super) columns: i64,             // Requested width of the next grid.
    pub(super) rows: i64,                // Requested height of the next grid.
    pub(super) last_error: Option<String>, // Message of the last rejected operation.
    pub(super) fps_limiter: FpsLimiter,  // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            columns: Config::DEFAULT_COLUMNS,
            rows: Config::DEFAULT_ROWS,
            last_error: None,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
        }
    }

    pub(super) fn populate(&mut self, seeding: Seeding) {
        self.last_error = self
            .session
            .populate(self.columns, self.rows, seeding)
            .err()
            .map(|err| err.to_string());
    }

    /// "Start" from a fresh grid, then pause/resume.
    pub(super) fn toggle_run(&mut self) {
        if !self.session.is_running() && self.session.generation() == 0 {
            self.session.start();
        } else {
            self.session.toggle_pause();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.session.step();
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.session.toggle_pause();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                if self.session.is_running() {
                    ctx.request_repaint();
                }

                self.handle_keys(ctx);

                self.draw(ui);

                self.session.tick();
            });

        if self.session.is_running() {
            self.fps_limiter.sleep(self.max_fps);
        }
    }
}
