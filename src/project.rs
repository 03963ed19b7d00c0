use log::info;

use crate::error::{EditorError, EditorResult};
use crate::frame::Frame;

/// The animation being edited: an ordered, never empty list of frames and
/// the index of the frame currently shown on the canvas.
#[derive(Debug, Clone)]
pub struct Project {
    frames: Vec<Frame>,
    current: usize,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
            current: 0,
        }
    }

    /// Drop every frame and start over with a single empty one.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::new());
        self.current = 0;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true: a project always keeps at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    pub fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current]
    }

    /// The frame drawn as onion skin, if the current frame is not the first.
    pub fn previous_frame(&self) -> Option<&Frame> {
        self.current.checked_sub(1).map(|index| &self.frames[index])
    }

    /// Append an empty frame and make it current.
    pub fn add_frame(&mut self) {
        self.frames.push(Frame::new());
        self.current = self.frames.len() - 1;
        info!("Added frame {} of {}", self.current + 1, self.frames.len());
    }

    /// Insert a deep copy of the current frame right after it and make the
    /// copy current.
    pub fn duplicate_current(&mut self) {
        let copy = self.current_frame().duplicate();
        self.frames.insert(self.current + 1, copy);
        self.current += 1;
        info!("Duplicated frame into position {}", self.current + 1);
    }

    /// Remove the current frame. The previous frame (or the first one)
    /// becomes current.
    pub fn delete_current(&mut self) -> EditorResult {
        if self.frames.len() <= 1 {
            return Err(EditorError::LastFrame);
        }
        self.frames.remove(self.current);
        self.current = self.current.saturating_sub(1);
        info!("Deleted frame, {} remaining", self.frames.len());
        Ok(())
    }

    pub fn set_current(&mut self, index: usize) -> EditorResult {
        if index >= self.frames.len() {
            return Err(EditorError::FrameOutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Step to the next frame, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.frames.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_has_one_frame() {
        let project = Project::new();
        assert_eq!(project.len(), 1);
        assert_eq!(project.current_index(), 0);
        assert!(project.previous_frame().is_none());
        assert!(!project.is_empty());
    }

    #[test]
    fn test_project_is_never_empty() {
        let mut project = Project::new();
        assert_eq!(project.delete_current(), Err(EditorError::LastFrame));
        assert!(!project.is_empty());

        project.add_frame();
        project.reset();
        assert_eq!(project.len(), 1);
        assert!(!project.is_empty());
    }

    #[test]
    fn test_advance_wraps() {
        let mut project = Project::new();
        project.add_frame();
        assert_eq!(project.current_index(), 1);
        project.advance();
        assert_eq!(project.current_index(), 0);
    }

    #[test]
    fn test_set_current_out_of_range() {
        let mut project = Project::new();
        assert_eq!(
            project.set_current(3),
            Err(EditorError::FrameOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(project.current_index(), 0);
    }
}
