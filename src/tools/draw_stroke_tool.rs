use egui::Pos2;
use log::debug;

use crate::stroke::StrokeBuilder;
use crate::tools::{Tool, ToolContext};

/// Whether the freehand tool paints with the brush or the eraser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Brush,
    /// Paints an opaque background-colored overlay, strokes underneath are kept
    Eraser,
}

/// Freehand tool shared by the brush and the eraser.
#[derive(Debug, Clone)]
pub struct DrawStrokeTool {
    mode: DrawMode,
    // Transient state: the stroke being drawn (if any)
    current_stroke: Option<StrokeBuilder>,
}

impl DrawStrokeTool {
    pub fn new(mode: DrawMode) -> Self {
        Self {
            mode,
            current_stroke: None,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    fn start_stroke(&self, ctx: &ToolContext<'_>) -> StrokeBuilder {
        match self.mode {
            DrawMode::Brush => StrokeBuilder::new(ctx.brush.color, ctx.brush.size as f32),
            DrawMode::Eraser => StrokeBuilder::new(
                ctx.config.background_color,
                (ctx.brush.size + ctx.config.eraser_padding) as f32,
            ),
        }
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        match self.mode {
            DrawMode::Brush => "Brush",
            DrawMode::Eraser => "Eraser",
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        let mut stroke = self.start_stroke(ctx);
        stroke.add_point(pos);
        self.current_stroke = Some(stroke);
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &mut ToolContext<'_>) {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
    }

    fn on_pointer_up(&mut self, _pos: Pos2, ctx: &mut ToolContext<'_>) {
        let Some(builder) = self.current_stroke.take() else {
            return;
        };
        let point_count = builder.points().len();
        match builder.finish() {
            Some(stroke) => {
                debug!("{} stroke committed with {} points", self.name(), point_count);
                ctx.frame.add_stroke(stroke);
            }
            None => debug!("{} stroke discarded, not enough points", self.name()),
        }
    }

    fn deactivate(&mut self) {
        self.current_stroke = None;
    }

    fn preview(&self) -> Option<&StrokeBuilder> {
        self.current_stroke.as_ref()
    }
}
