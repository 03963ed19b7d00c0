use std::collections::HashSet;

use egui::{Pos2, Rect, Vec2};
use log::debug;

use crate::frame::Frame;
use crate::stroke::StrokeId;

/// Strokes of the current frame picked with the selection rectangle.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    strokes: HashSet<StrokeId>,
    /// Finalized rectangle, kept visible until the selection is cleared
    rect: Option<Rect>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.strokes.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn hide_rect(&mut self) {
        self.rect = None;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.rect = None;
    }

    /// Replace the selection with every stroke of `frame` that has at least
    /// one point inside the rectangle spanned by `a` and `b` (edges included).
    pub fn select_within(&mut self, frame: &Frame, a: Pos2, b: Pos2) {
        let bounds = Rect::from_two_pos(a, b);
        self.strokes = frame
            .strokes()
            .iter()
            .filter(|stroke| stroke.points().iter().any(|p| bounds.contains(*p)))
            .map(|stroke| stroke.id())
            .collect();
        self.rect = Some(bounds);
        debug!("Selected {} of {} strokes in {:?}", self.strokes.len(), frame.len(), bounds);
    }

    /// Translate every selected stroke of `frame` by `delta`.
    pub fn move_selected(&self, frame: &mut Frame, delta: Vec2) {
        for stroke in frame.strokes_mut() {
            if self.strokes.contains(&stroke.id()) {
                stroke.translate(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Stroke;
    use egui::{Color32, pos2};

    fn frame_with(points: &[&[Pos2]]) -> Frame {
        let mut frame = Frame::new();
        for pts in points {
            frame.add_stroke(Stroke::new(Color32::BLACK, 3.0, pts.to_vec()));
        }
        frame
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let frame = frame_with(&[&[pos2(10.0, 10.0), pos2(50.0, 50.0)]]);
        let mut selection = Selection::new();
        selection.select_within(&frame, pos2(0.0, 0.0), pos2(10.0, 10.0));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_reversed_corners_normalize() {
        let frame = frame_with(&[&[pos2(5.0, 5.0), pos2(6.0, 6.0)]]);
        let mut selection = Selection::new();
        selection.select_within(&frame, pos2(20.0, 20.0), pos2(0.0, 0.0));
        assert_eq!(selection.rect(), Some(Rect::from_min_max(pos2(0.0, 0.0), pos2(20.0, 20.0))));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_empty_result_keeps_rect() {
        let frame = frame_with(&[&[pos2(100.0, 100.0), pos2(120.0, 100.0)]]);
        let mut selection = Selection::new();
        selection.select_within(&frame, pos2(0.0, 0.0), pos2(10.0, 10.0));
        assert!(selection.is_empty());
        assert!(selection.rect().is_some());
    }
}
