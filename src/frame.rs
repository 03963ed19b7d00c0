use crate::stroke::Stroke;

/// One drawing of the animation. Strokes are kept in paint order: later
/// strokes draw over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    strokes: Vec<Stroke>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn strokes_mut(&mut self) -> &mut [Stroke] {
        &mut self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Deep copy: every stroke gets its own point buffer and id.
    pub fn duplicate(&self) -> Self {
        Self {
            strokes: self.strokes.iter().map(Stroke::deep_copy).collect(),
        }
    }

    /// Structural equality of the stroke contents, ignoring stroke ids.
    pub fn same_content(&self, other: &Frame) -> bool {
        self.strokes.len() == other.strokes.len()
            && self
                .strokes
                .iter()
                .zip(&other.strokes)
                .all(|(a, b)| a.same_content(b))
    }
}
