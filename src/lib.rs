#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod input;
pub mod panels;
pub mod playback;
pub mod project;
pub mod renderer;
pub mod selection;
pub mod session;
pub mod stroke;
pub mod tools;

pub use app::AnimatorApp;
pub use command::Command;
pub use config::EditorConfig;
pub use controller::{EditorController, Notice, NoticeKind};
pub use error::{EditorError, EditorResult};
pub use frame::Frame;
pub use input::{InputHandler, PointerEvent, PointerEventKind};
pub use playback::{Playback, PlaybackState};
pub use project::Project;
pub use renderer::{DrawOp, Renderer};
pub use selection::Selection;
pub use session::EditorSession;
pub use stroke::{Stroke, StrokeId};
pub use tools::{Tool, ToolKind};
