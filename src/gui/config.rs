use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 400.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    /// Share of the window height taken by the square canvas before it is fitted to the grid.
    pub const CANVAS_FRACTION: f32 = 0.7;
    pub const CANVAS_COLOR: Color32 = Color32::WHITE;
    pub const LIVE_CELL_COLOR: Color32 = Color32::from_rgb(0x87, 0xce, 0xeb);

    pub const DEFAULT_COLUMNS: i64 = 64;
    pub const DEFAULT_ROWS: i64 = 48;
    pub const MAX_SIDE: i64 = 2000;

    pub const MAX_FPS: f64 = 60.;
}
