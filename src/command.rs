use log::info;

use crate::error::{EditorError, EditorResult};
use crate::session::EditorSession;
use crate::tools::ToolKind;

/// Represents every action the user can trigger from the toolbar, the side
/// panels, the timeline or the edit menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reset to a single empty frame (the UI asks for confirmation first)
    NewProject,
    Save,
    Open,
    Play,
    Stop,
    /// Raw text of the FPS field
    SetFps(String),
    SetTool(ToolKind),
    SetBrushSize(u32),
    SetOnionSkin(bool),
    AddFrame,
    DuplicateFrame,
    DeleteFrame,
    SelectFrame(usize),
    ClearSelection,
}

/// Parse the FPS field: a positive integer, surrounding whitespace allowed.
pub fn parse_fps(input: &str) -> EditorResult<u32> {
    match input.trim().parse::<i64>() {
        Ok(value) if value > 0 => {
            u32::try_from(value).map_err(|_| EditorError::InvalidFps(input.to_owned()))
        }
        _ => Err(EditorError::InvalidFps(input.to_owned())),
    }
}

impl Command {
    /// Apply the command to the session. On error the session is unchanged.
    pub fn execute(&self, session: &mut EditorSession) -> EditorResult {
        match self {
            Command::NewProject => session.new_project(),
            Command::Save => return Err(EditorError::NotImplemented("save")),
            Command::Open => return Err(EditorError::NotImplemented("open")),
            Command::Play => {
                session.play();
            }
            Command::Stop => session.stop(),
            Command::SetFps(input) => {
                let fps = parse_fps(input)?;
                session.set_fps(fps)?;
            }
            Command::SetTool(kind) => session.set_tool(*kind),
            Command::SetBrushSize(size) => session.set_brush_size(*size),
            Command::SetOnionSkin(enabled) => {
                session.set_onion_skin(*enabled);
                info!("Onion skin {}", if *enabled { "enabled" } else { "disabled" });
            }
            Command::AddFrame => session.add_frame(),
            Command::DuplicateFrame => session.duplicate_frame(),
            Command::DeleteFrame => session.delete_frame()?,
            Command::SelectFrame(index) => session.select_frame(*index)?,
            Command::ClearSelection => session.clear_selection(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fps() {
        assert_eq!(parse_fps("12"), Ok(12));
        assert_eq!(parse_fps(" 24 "), Ok(24));
        assert!(parse_fps("0").is_err());
        assert!(parse_fps("-5").is_err());
        assert!(parse_fps("abc").is_err());
        assert!(parse_fps("2.5").is_err());
        assert!(parse_fps("").is_err());
    }

    #[test]
    fn test_save_and_open_are_placeholders() {
        let mut session = EditorSession::default();
        assert_eq!(
            Command::Save.execute(&mut session),
            Err(EditorError::NotImplemented("save"))
        );
        assert_eq!(
            Command::Open.execute(&mut session),
            Err(EditorError::NotImplemented("open"))
        );
    }
}
