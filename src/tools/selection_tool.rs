use egui::{Pos2, Rect};
use log::debug;

use crate::tools::{Tool, ToolContext};

// Gesture state of the selection tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionState {
    Idle,
    /// Rubber-band rectangle from `anchor` to the pointer
    Marquee { anchor: Pos2, corner: Pos2 },
    /// Dragging the selected strokes; `last` is the previous pointer position
    Moving { last: Pos2 },
}

/// Picks strokes with a rectangle, then drags the picked strokes around.
///
/// A press while something is already selected always starts a move, so a
/// new rectangle can only be drawn after the selection has been cleared.
#[derive(Debug, Clone)]
pub struct SelectionTool {
    pub state: SelectionState,
}

impl Default for SelectionTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionTool {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
        }
    }

    /// The rubber-band rectangle while it is being dragged
    pub fn marquee(&self) -> Option<Rect> {
        match self.state {
            SelectionState::Marquee { anchor, corner } => Some(Rect::from_two_pos(anchor, corner)),
            _ => None,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, SelectionState::Moving { .. })
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        ctx.selection.hide_rect();
        self.state = if ctx.selection.is_empty() {
            SelectionState::Marquee {
                anchor: pos,
                corner: pos,
            }
        } else {
            debug!("Moving {} selected strokes", ctx.selection.len());
            SelectionState::Moving { last: pos }
        };
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match &mut self.state {
            SelectionState::Marquee { corner, .. } => *corner = pos,
            SelectionState::Moving { last } => {
                let delta = pos - *last;
                ctx.selection.move_selected(ctx.frame, delta);
                *last = pos;
            }
            SelectionState::Idle => {}
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        if let SelectionState::Marquee { anchor, .. } = self.state {
            ctx.selection.select_within(ctx.frame, anchor, pos);
        }
        self.state = SelectionState::Idle;
    }

    fn deactivate(&mut self) {
        self.state = SelectionState::Idle;
    }
}
