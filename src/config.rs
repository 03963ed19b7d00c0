use egui::{Color32, Vec2};

/// Smallest and largest brush size the properties slider allows.
pub const BRUSH_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

/// Static settings shared by the session, the renderer and the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Size of the drawing surface in canvas units
    pub canvas_size: Vec2,
    pub default_fps: u32,
    pub default_brush_size: u32,
    pub brush_color: Color32,
    /// Canvas background, also used as the eraser color
    pub background_color: Color32,
    pub onion_skin_enabled: bool,
    /// Color every stroke of the previous frame is forced to
    pub onion_color: Color32,
    /// Color of selected strokes and of the selection rectangle
    pub highlight_color: Color32,
    /// Fill color of the current frame's timeline button
    pub timeline_highlight: Color32,
    /// Extra width the eraser adds on top of the brush size
    pub eraser_padding: u32,
    /// Grid spacing used when rasterizing a fill disk
    pub fill_step: u32,
    pub fill_min_radius: u32,
    /// Fill radius is `brush_size * fill_radius_factor` unless below the minimum
    pub fill_radius_factor: u32,
    pub fill_width: f32,
    /// Dash and gap length of the selection rectangle outline
    pub selection_dash: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(640.0, 360.0),
            default_fps: 6,
            default_brush_size: 3,
            brush_color: Color32::BLACK,
            background_color: Color32::WHITE,
            onion_skin_enabled: true,
            onion_color: Color32::from_rgb(0xd0, 0xd0, 0xd0),
            highlight_color: Color32::from_rgb(0x00, 0xff, 0xff),
            timeline_highlight: Color32::YELLOW,
            eraser_padding: 4,
            fill_step: 4,
            fill_min_radius: 40,
            fill_radius_factor: 5,
            fill_width: 6.0,
            selection_dash: 3.0,
        }
    }
}

impl EditorConfig {
    /// Clamp a requested brush size into the slider range.
    pub fn clamp_brush_size(size: u32) -> u32 {
        size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end())
    }
}
