use super::{App, Config};
use crate::{BoundaryPolicy, Grid, Seeding};
use eframe::egui::{
    vec2, Button, DragValue, Pos2, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

/// Shrinks a square canvas of side `side` along its short axis so that it
/// matches the `width x height` aspect ratio of the grid.
pub fn fit_canvas(side: f32, width: usize, height: usize) -> [f32; 2] {
    let (w, h) = (width as f32, height as f32);
    if width > height {
        [side, side / (w / h)]
    } else if height > width {
        [side / (h / w), side]
    } else {
        [side, side]
    }
}

/// Side of one cell in pixels: the largest uniform scale that fits the grid into the canvas.
pub fn scale_factor(canvas: [f32; 2], width: usize, height: usize) -> f32 {
    (canvas[0] / width as f32).min(canvas[1] / height as f32)
}

pub fn cell_rect(origin: Pos2, x: usize, y: usize, scale: f32) -> Rect {
    Rect::from_min_size(
        origin + vec2(x as f32 * scale, y as f32 * scale),
        Vec2::splat(scale),
    )
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_population_controls(&mut self, ui: &mut Ui) {
        let can_reseed = self.session.can_reseed();

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Columns: "));
            ui.add_enabled(
                can_reseed,
                DragValue::new(&mut self.columns).range(0..=Config::MAX_SIDE),
            );
            ui.label(Self::new_text(" Rows: "));
            ui.add_enabled(
                can_reseed,
                DragValue::new(&mut self.rows).range(0..=Config::MAX_SIDE),
            );
        });

        let (random_text, three_text) = if can_reseed {
            ("Random Repopulate", "Three Cell Seed")
        } else {
            ("Disabled while looping", "Disabled while looping")
        };
        if ui
            .add_enabled(can_reseed, Self::new_button(random_text))
            .clicked()
        {
            self.populate(Seeding::Random);
        }
        if ui
            .add_enabled(can_reseed, Self::new_button(three_text))
            .clicked()
        {
            self.populate(Seeding::ThreeCell);
        }

        if let Some(err) = &self.last_error {
            ui.label(
                RichText::new(err)
                    .color(Config::ERROR_COLOR)
                    .size(Config::TEXT_SIZE),
            );
        }
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let has_grid = self.session.grid().is_some();

        let text = if self.session.is_running() {
            "Pause"
        } else if self.session.generation() == 0 {
            "Start"
        } else {
            "Resume"
        };
        if ui.add_enabled(has_grid, Self::new_button(text)).clicked() {
            self.toggle_run();
        }

        if ui
            .add_enabled(has_grid, Self::new_button("Next step"))
            .clicked()
        {
            self.session.step();
        }

        let mut policy = self.session.policy();
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Edges: "));
            ui.radio_value(
                &mut policy,
                BoundaryPolicy::Wraparound,
                Self::new_text("Wraparound"),
            );
            ui.radio_value(
                &mut policy,
                BoundaryPolicy::DeadBorder,
                Self::new_text("Dead border"),
            );
        });
        self.session.set_policy(policy);
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let text = match self.session.stats() {
            Some(stats) => stats.to_string(),
            None => "Choose a size and a seed to create a grid.".to_string(),
        };
        ui.label(Self::new_text(&text));

        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!(
                "FPS: {:3} ",
                self.fps_limiter.fps().round() as u32
            )));
            ui.label(Self::new_text("max: "));
            ui.add(Slider::new(&mut self.max_fps, 1.0..=240.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_population_controls(ui);

                    ui.add_space(Config::WIDGET_GAP);

                    self.draw_run_controls(ui);

                    ui.add_space(Config::WIDGET_GAP);

                    self.draw_stats(ui);
                });

                // to adjust the bounds
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });
        });
    }

    fn draw_grid(ui: &mut Ui, grid: &Grid, side: f32) {
        let (w, h) = grid.size();
        let canvas = fit_canvas(side, w, h);
        let (response, painter) = ui.allocate_painter(vec2(canvas[0], canvas[1]), Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0., Config::CANVAS_COLOR);

        let scale = scale_factor(canvas, w, h);
        for (i, _) in grid.cells().iter().enumerate().filter(|(_, alive)| **alive) {
            painter.rect_filled(
                cell_rect(origin, i % w, i / w, scale),
                0.,
                Config::LIVE_CELL_COLOR,
            );
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let side = (area.y * Config::CANVAS_FRACTION)
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(0.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical(|ui| {
                if let Some(grid) = self.session.grid() {
                    Self::draw_grid(ui, grid, side);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_fit_canvas() {
        assert_eq!(fit_canvas(700., 100, 50), [700., 350.]);
        assert_eq!(fit_canvas(700., 50, 100), [350., 700.]);
        assert_eq!(fit_canvas(700., 30, 30), [700., 700.]);
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor([700., 350.], 100, 50), 7.);
        // the tighter axis wins
        assert_eq!(scale_factor([700., 700.], 70, 35), 10.);
        assert_eq!(scale_factor([700., 700.], 35, 70), 10.);
    }

    #[test]
    fn test_cell_rect() {
        let rect = cell_rect(pos2(10., 20.), 3, 2, 5.);
        assert_eq!(rect.min, pos2(25., 30.));
        assert_eq!(rect.max, pos2(30., 35.));
    }
}
