use egui::{Color32, Pos2, Vec2};
use uuid::Uuid;

/// Identity of a stroke, used for selection membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered polyline with a color and a width.
///
/// Consecutive points are joined by line segments, so a stroke with fewer
/// than two points has nothing to render.
#[derive(Debug, Clone)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            id: StrokeId::new(),
            points,
            color,
            thickness,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Move every point by the same delta.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    /// Copy of this stroke with its own point buffer and a fresh id.
    pub fn deep_copy(&self) -> Self {
        Self::new(self.color, self.thickness, self.points.clone())
    }

    /// Same geometry and paint, ignoring identity.
    pub fn same_content(&self, other: &Stroke) -> bool {
        self.points == other.points && self.color == other.color && self.thickness == other.thickness
    }
}

/// Accumulates pointer positions while a brush or eraser gesture is in progress.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl StrokeBuilder {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Finish the gesture. A click without drag yields a single point and
    /// produces no stroke.
    pub fn finish(self) -> Option<Stroke> {
        if self.points.len() > 1 {
            Some(Stroke::new(self.color, self.thickness, self.points))
        } else {
            None
        }
    }
}
