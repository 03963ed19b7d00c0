//! The editing session: one explicit context object holding everything the
//! editor mutates. Every operation takes it by `&mut`, so tests can build a
//! fresh session per case without any UI present.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::input::{PointerEvent, PointerEventKind};
use crate::playback::Playback;
use crate::project::Project;
use crate::selection::Selection;
use crate::tools::{BrushSettings, Tool, ToolContext, ToolKind, ToolType};

#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    project: Project,
    tool: ToolType,
    brush: BrushSettings,
    selection: Selection,
    onion_skin: bool,
    playback: Playback,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            project: Project::new(),
            tool: ToolType::default(),
            brush: BrushSettings::from_config(&config),
            selection: Selection::new(),
            onion_skin: config.onion_skin_enabled,
            playback: Playback::new(config.default_fps),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn onion_skin(&self) -> bool {
        self.onion_skin
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    // Tools

    /// Switch tools. Any gesture in progress is dropped and the selection is
    /// cleared.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tool.deactivate();
        self.tool = kind.new_instance();
        self.selection.clear();
        info!("Tool selected: {}", kind.label());
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush.size = EditorConfig::clamp_brush_size(size);
    }

    pub fn set_onion_skin(&mut self, enabled: bool) {
        self.onion_skin = enabled;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        if let ToolType::Selection(tool) = &mut self.tool {
            tool.deactivate();
        }
    }

    /// Route a canvas pointer event to the active tool.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        let mut ctx = ToolContext {
            frame: self.project.current_frame_mut(),
            brush: &self.brush,
            selection: &mut self.selection,
            config: &self.config,
        };
        match event.kind {
            PointerEventKind::Down => self.tool.on_pointer_down(event.pos, &mut ctx),
            PointerEventKind::Drag => self.tool.on_pointer_move(event.pos, &mut ctx),
            PointerEventKind::Up => self.tool.on_pointer_up(event.pos, &mut ctx),
        }
    }

    // Frames

    pub fn add_frame(&mut self) {
        self.project.add_frame();
        self.clear_selection();
    }

    pub fn duplicate_frame(&mut self) {
        self.project.duplicate_current();
        self.clear_selection();
    }

    pub fn delete_frame(&mut self) -> EditorResult {
        self.project.delete_current()?;
        self.clear_selection();
        Ok(())
    }

    pub fn select_frame(&mut self, index: usize) -> EditorResult {
        self.project.set_current(index)?;
        self.clear_selection();
        debug!("Frame {} selected", index + 1);
        Ok(())
    }

    /// Discard every frame and start from a single empty one.
    pub fn new_project(&mut self) {
        self.project.reset();
        self.clear_selection();
        self.tool.deactivate();
        info!("Started a new project");
    }

    // Playback

    pub fn play(&mut self) -> bool {
        self.playback.play()
    }

    pub fn stop(&mut self) {
        self.playback.stop();
    }

    pub fn set_fps(&mut self, fps: u32) -> EditorResult {
        self.playback.set_fps(fps)
    }

    /// One synchronous playback step.
    pub fn tick(&mut self) -> bool {
        let stepped = self.playback.tick(&mut self.project);
        if stepped {
            self.clear_selection();
        }
        stepped
    }

    /// Advance playback when a step is due. Returns the delay until the next
    /// step while playing.
    pub fn poll_playback(&mut self, now: Instant) -> Option<Duration> {
        let (stepped, next) = self.playback.poll(now, &mut self.project);
        if stepped {
            self.clear_selection();
        }
        next
    }
}
