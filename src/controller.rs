use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::warn;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::input::PointerEvent;
use crate::session::EditorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message shown to the user in a dialog until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl From<&EditorError> for Notice {
    fn from(error: &EditorError) -> Self {
        let (kind, title) = match error {
            EditorError::LastFrame => (NoticeKind::Info, "Not allowed"),
            EditorError::InvalidFps(_) => (NoticeKind::Error, "Error"),
            EditorError::FrameOutOfRange { .. } => (NoticeKind::Error, "Error"),
            EditorError::NotImplemented(_) => (NoticeKind::Info, "WIP"),
        };
        Self {
            kind,
            title,
            message: error.to_string(),
        }
    }
}

/// Sits between the UI and the session: runs commands, keeps the text of the
/// FPS field in sync and collects notices for failed commands.
#[derive(Debug)]
pub struct EditorController {
    session: EditorSession,
    /// Text currently in the FPS field
    pub fps_field: String,
    notices: VecDeque<Notice>,
    confirm_new_project: bool,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorController {
    pub fn new(config: EditorConfig) -> Self {
        let session = EditorSession::new(config);
        Self {
            fps_field: session.playback().fps().to_string(),
            session,
            notices: VecDeque::new(),
            confirm_new_project: false,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Run a command, turning a failure into a notice.
    pub fn dispatch(&mut self, command: Command) {
        match command.execute(&mut self.session) {
            Ok(()) => {
                if matches!(command, Command::SetFps(_)) {
                    self.fps_field = self.session.playback().fps().to_string();
                }
            }
            Err(error) => {
                warn!("{:?} rejected: {}", command, error);
                if matches!(error, EditorError::InvalidFps(_)) {
                    self.fps_field = self.session.playback().fps().to_string();
                }
                self.notices.push_back(Notice::from(&error));
            }
        }
    }

    /// Apply the FPS field's current text.
    pub fn apply_fps_field(&mut self) {
        self.dispatch(Command::SetFps(self.fps_field.clone()));
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        self.session.handle_pointer(event);
    }

    /// Drive playback. Returns how long the UI may sleep before the next step.
    pub fn update(&mut self, now: Instant) -> Option<Duration> {
        self.session.poll_playback(now)
    }

    /// True while a dialog waits for an answer; the rest of the UI is inert then.
    pub fn is_modal(&self) -> bool {
        self.confirm_new_project || !self.notices.is_empty()
    }

    // New project confirmation

    pub fn request_new_project(&mut self) {
        self.confirm_new_project = true;
    }

    pub fn is_confirming_new_project(&self) -> bool {
        self.confirm_new_project
    }

    pub fn answer_new_project(&mut self, confirmed: bool) {
        self.confirm_new_project = false;
        if confirmed {
            self.dispatch(Command::NewProject);
        }
    }

    // Notices

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn pending_notices(&self) -> usize {
        self.notices.len()
    }
}
