use egui::{Color32, Pos2};

use crate::config::EditorConfig;
use crate::frame::Frame;
use crate::selection::Selection;
use crate::stroke::StrokeBuilder;

/// Everything a tool may read or change while handling a pointer event.
pub struct ToolContext<'a> {
    /// Frame currently shown on the canvas
    pub frame: &'a mut Frame,
    pub brush: &'a BrushSettings,
    pub selection: &'a mut Selection,
    pub config: &'a EditorConfig,
}

/// Brush parameters shared by the brush, eraser and fill tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub size: u32,
    pub color: Color32,
}

impl BrushSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            size: EditorConfig::clamp_brush_size(config.default_brush_size),
            color: config.brush_color,
        }
    }
}

/// Tool trait defines the interface for all canvas tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>);

    /// Handle pointer movement while the button is held.
    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>);

    /// Handle pointer release.
    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>);

    /// Drop any gesture in progress.
    fn deactivate(&mut self);

    /// Stroke being drawn by the current gesture, for live preview
    fn preview(&self) -> Option<&StrokeBuilder> {
        None
    }
}

mod draw_stroke_tool;
pub use draw_stroke_tool::{DrawMode, DrawStrokeTool};

mod fill_tool;
pub use fill_tool::{FillTool, fill_points};

mod selection_tool;
pub use selection_tool::{SelectionState, SelectionTool};

/// The four mutually exclusive canvas modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Fill,
    Select,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [Self::Brush, Self::Eraser, Self::Fill, Self::Select];

    pub fn label(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
            Self::Select => "Select",
        }
    }

    /// Create a fresh tool instance for this mode
    pub fn new_instance(self) -> ToolType {
        match self {
            Self::Brush => ToolType::DrawStroke(DrawStrokeTool::new(DrawMode::Brush)),
            Self::Eraser => ToolType::DrawStroke(DrawStrokeTool::new(DrawMode::Eraser)),
            Self::Fill => ToolType::Fill(FillTool::new()),
            Self::Select => ToolType::Selection(SelectionTool::new()),
        }
    }
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug, Clone)]
pub enum ToolType {
    DrawStroke(DrawStrokeTool),
    Fill(FillTool),
    Selection(SelectionTool),
}

impl Default for ToolType {
    fn default() -> Self {
        ToolKind::default().new_instance()
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::Fill(tool) => tool.name(),
            Self::Selection(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_down(pos, ctx),
            Self::Fill(tool) => tool.on_pointer_down(pos, ctx),
            Self::Selection(tool) => tool.on_pointer_down(pos, ctx),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_move(pos, ctx),
            Self::Fill(tool) => tool.on_pointer_move(pos, ctx),
            Self::Selection(tool) => tool.on_pointer_move(pos, ctx),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_up(pos, ctx),
            Self::Fill(tool) => tool.on_pointer_up(pos, ctx),
            Self::Selection(tool) => tool.on_pointer_up(pos, ctx),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::DrawStroke(tool) => tool.deactivate(),
            Self::Fill(tool) => tool.deactivate(),
            Self::Selection(tool) => tool.deactivate(),
        }
    }

    fn preview(&self) -> Option<&StrokeBuilder> {
        match self {
            Self::DrawStroke(tool) => tool.preview(),
            Self::Fill(tool) => tool.preview(),
            Self::Selection(tool) => tool.preview(),
        }
    }
}

// Helper methods for ToolType
impl ToolType {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::DrawStroke(tool) => match tool.mode() {
                DrawMode::Brush => ToolKind::Brush,
                DrawMode::Eraser => ToolKind::Eraser,
            },
            Self::Fill(_) => ToolKind::Fill,
            Self::Selection(_) => ToolKind::Select,
        }
    }

    pub fn as_selection_tool(&self) -> Option<&SelectionTool> {
        match self {
            Self::Selection(tool) => Some(tool),
            _ => None,
        }
    }
}
