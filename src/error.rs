use thiserror::Error;

/// Errors raised by editor commands.
///
/// None of these are fatal: the command is rejected, the session is left
/// untouched and the controller turns the error into a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Tried to delete the only frame of the project
    #[error("At least one frame must exist.")]
    LastFrame,

    /// FPS input that is not a positive integer
    #[error("FPS must be a positive integer.")]
    InvalidFps(String),

    #[error("Frame {index} does not exist (project has {len} frames)")]
    FrameOutOfRange { index: usize, len: usize },

    /// Placeholder commands (save/open)
    #[error("This feature is not implemented yet.")]
    NotImplemented(&'static str),
}

/// Result type for editor operations
pub type EditorResult<T = ()> = Result<T, EditorError>;
