// src/renderer.rs
use egui::{Color32, Pos2, Rect, Shape, Vec2};

use crate::config::EditorConfig;
use crate::frame::Frame;
use crate::selection::Selection;
use crate::session::EditorSession;
use crate::stroke::StrokeId;
use crate::tools::Tool;

/// One primitive of the canvas display list, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill the whole drawing surface
    Clear { color: Color32 },
    /// Line between two successive stroke points, with round caps
    Segment {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Dashed outline of the selection rectangle
    DashedRect { rect: Rect, color: Color32 },
}

/// Builds the canvas display list from the session and paints it with egui.
///
/// Every redraw is a full redraw: clear, onion skin, current frame, the
/// stroke in progress, then the selection rectangle on top.
#[derive(Debug, Clone)]
pub struct Renderer {
    canvas_size: Vec2,
    background: Color32,
    onion_color: Color32,
    highlight: Color32,
    dash: f32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            canvas_size: config.canvas_size,
            background: config.background_color,
            onion_color: config.onion_color,
            highlight: config.highlight_color,
            dash: config.selection_dash,
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Produce the ordered draw operations for the current state.
    pub fn display_list(&self, session: &EditorSession) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Clear { color: self.background }];
        let project = session.project();

        if session.onion_skin() {
            if let Some(previous) = project.previous_frame() {
                self.push_frame(&mut ops, previous, |_| Some(self.onion_color));
            }
        }

        let selection = session.selection();
        self.push_frame(&mut ops, project.current_frame(), |id| {
            selection.contains(id).then_some(self.highlight)
        });

        if let Some(preview) = session.tool().preview() {
            push_polyline(&mut ops, preview.points(), preview.thickness(), preview.color());
        }

        if let Some(rect) = Self::visible_rect(session, selection) {
            ops.push(DrawOp::DashedRect {
                rect,
                color: self.highlight,
            });
        }

        ops
    }

    fn push_frame(
        &self,
        ops: &mut Vec<DrawOp>,
        frame: &Frame,
        color_override: impl Fn(StrokeId) -> Option<Color32>,
    ) {
        for stroke in frame.strokes() {
            if !stroke.is_renderable() {
                continue;
            }
            let color = color_override(stroke.id()).unwrap_or(stroke.color());
            push_polyline(ops, stroke.points(), stroke.thickness(), color);
        }
    }

    fn visible_rect(session: &EditorSession, selection: &Selection) -> Option<Rect> {
        session
            .tool()
            .as_selection_tool()
            .and_then(|tool| tool.marquee())
            .or(selection.rect())
    }

    /// Convert a display list to egui shapes placed at `origin` on screen.
    pub fn paint(&self, ops: &[DrawOp], origin: Pos2) -> Vec<Shape> {
        let offset = origin.to_vec2();
        let mut shapes = Vec::with_capacity(ops.len() * 3);

        for op in ops {
            match *op {
                DrawOp::Clear { color } => {
                    let rect = Rect::from_min_size(origin, self.canvas_size);
                    shapes.push(Shape::rect_filled(rect, 0.0, color));
                }
                DrawOp::Segment {
                    from,
                    to,
                    width,
                    color,
                } => {
                    let (a, b) = (from + offset, to + offset);
                    shapes.push(Shape::line_segment([a, b], egui::Stroke::new(width, color)));
                    // Round caps
                    shapes.push(Shape::circle_filled(a, width / 2.0, color));
                    shapes.push(Shape::circle_filled(b, width / 2.0, color));
                }
                DrawOp::DashedRect { rect, color } => {
                    let rect = rect.translate(offset);
                    let outline = [
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                        rect.left_top(),
                    ];
                    shapes.extend(Shape::dashed_line(
                        &outline,
                        egui::Stroke::new(1.0, color),
                        self.dash,
                        self.dash,
                    ));
                }
            }
        }

        shapes
    }

    /// Draws the current session onto the given painter
    ///
    /// Args:
    ///     painter (egui::Painter): Painter clipped to the canvas
    ///     origin (egui::Pos2): Screen position of the canvas' top-left corner
    ///     session (EditorSession): State to draw
    pub fn render(&self, painter: &egui::Painter, origin: Pos2, session: &EditorSession) {
        let ops = self.display_list(session);
        painter.extend(self.paint(&ops, origin));
    }
}

fn push_polyline(ops: &mut Vec<DrawOp>, points: &[Pos2], width: f32, color: Color32) {
    for pair in points.windows(2) {
        ops.push(DrawOp::Segment {
            from: pair[0],
            to: pair[1],
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;
    use egui::pos2;

    fn segment_colors(ops: &[DrawOp]) -> Vec<Color32> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Segment { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn draw_line(session: &mut EditorSession, from: Pos2, to: Pos2) {
        session.handle_pointer(&PointerEvent::down(from));
        session.handle_pointer(&PointerEvent::drag(to));
        session.handle_pointer(&PointerEvent::up(to));
    }

    #[test]
    fn test_empty_session_only_clears() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let session = EditorSession::new(config);
        assert_eq!(
            renderer.display_list(&session),
            vec![DrawOp::Clear { color: Color32::WHITE }]
        );
    }

    #[test]
    fn test_onion_skin_draws_previous_frame_dimmed() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let mut session = EditorSession::new(config.clone());
        draw_line(&mut session, pos2(0.0, 0.0), pos2(10.0, 0.0));
        session.add_frame();
        draw_line(&mut session, pos2(0.0, 5.0), pos2(10.0, 5.0));

        assert_eq!(
            segment_colors(&renderer.display_list(&session)),
            vec![config.onion_color, config.brush_color]
        );

        session.set_onion_skin(false);
        assert_eq!(
            segment_colors(&renderer.display_list(&session)),
            vec![config.brush_color]
        );
    }

    #[test]
    fn test_single_point_strokes_are_skipped() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let mut frame = Frame::new();
        frame.add_stroke(crate::stroke::Stroke::new(Color32::RED, 2.0, vec![pos2(1.0, 1.0)]));
        let mut ops = Vec::new();
        renderer.push_frame(&mut ops, &frame, |_| None);
        assert!(ops.is_empty());
    }

    #[test]
    fn test_paint_adds_round_caps() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let ops = [DrawOp::Segment {
            from: pos2(0.0, 0.0),
            to: pos2(5.0, 0.0),
            width: 4.0,
            color: Color32::BLACK,
        }];
        assert_eq!(renderer.paint(&ops, pos2(10.0, 10.0)).len(), 3);
    }

    fn dashed_rects(ops: &[DrawOp]) -> Vec<Rect> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::DashedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_selected_stroke_is_highlighted_under_rect() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let mut session = EditorSession::new(config.clone());
        draw_line(&mut session, pos2(10.0, 10.0), pos2(20.0, 10.0));
        session.set_tool(crate::tools::ToolKind::Select);
        draw_line(&mut session, pos2(0.0, 0.0), pos2(50.0, 50.0));

        let bounds = Rect::from_min_max(pos2(0.0, 0.0), pos2(50.0, 50.0));
        assert_eq!(
            renderer.display_list(&session),
            vec![
                DrawOp::Clear { color: config.background_color },
                DrawOp::Segment {
                    from: pos2(10.0, 10.0),
                    to: pos2(20.0, 10.0),
                    width: 3.0,
                    color: config.highlight_color,
                },
                DrawOp::DashedRect { rect: bounds, color: config.highlight_color },
            ]
        );

        session.clear_selection();
        let ops = renderer.display_list(&session);
        assert_eq!(segment_colors(&ops), vec![config.brush_color]);
        assert!(dashed_rects(&ops).is_empty());
    }

    #[test]
    fn test_live_marquee_follows_pointer_until_tool_change() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let mut session = EditorSession::new(config);
        session.set_tool(crate::tools::ToolKind::Select);
        session.handle_pointer(&PointerEvent::down(pos2(40.0, 30.0)));
        session.handle_pointer(&PointerEvent::drag(pos2(10.0, 60.0)));

        assert_eq!(
            dashed_rects(&renderer.display_list(&session)),
            vec![Rect::from_min_max(pos2(10.0, 30.0), pos2(40.0, 60.0))]
        );

        session.set_tool(crate::tools::ToolKind::Brush);
        assert!(dashed_rects(&renderer.display_list(&session)).is_empty());
    }

    #[test]
    fn test_stroke_in_progress_is_previewed() {
        let config = EditorConfig::default();
        let renderer = Renderer::new(&config);
        let mut session = EditorSession::new(config.clone());
        session.set_tool(crate::tools::ToolKind::Eraser);
        session.handle_pointer(&PointerEvent::down(pos2(0.0, 0.0)));
        session.handle_pointer(&PointerEvent::drag(pos2(5.0, 0.0)));
        session.handle_pointer(&PointerEvent::drag(pos2(10.0, 0.0)));

        let ops = renderer.display_list(&session);
        assert!(session.project().current_frame().is_empty());
        assert_eq!(
            &ops[1..],
            &[
                DrawOp::Segment {
                    from: pos2(0.0, 0.0),
                    to: pos2(5.0, 0.0),
                    width: 7.0,
                    color: config.background_color,
                },
                DrawOp::Segment {
                    from: pos2(5.0, 0.0),
                    to: pos2(10.0, 0.0),
                    width: 7.0,
                    color: config.background_color,
                },
            ]
        );
    }
}
