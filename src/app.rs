use std::time::Instant;

use crate::config::EditorConfig;
use crate::controller::EditorController;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;

pub const APP_TITLE: &str = "eframe Animator";

pub struct AnimatorApp {
    controller: EditorController,
    renderer: Renderer,
    input: InputHandler,
    show_edit_menu: bool,
}

impl Default for AnimatorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl AnimatorApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        log::info!("Starting {} with a {:?} canvas", APP_TITLE, config.canvas_size);
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            renderer: Renderer::new(&config),
            controller: EditorController::new(config),
            input: InputHandler::new(),
            show_edit_menu: false,
        }
    }

    pub fn controller(&self) -> &EditorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EditorController {
        &mut self.controller
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn open_edit_menu(&mut self) {
        self.show_edit_menu = true;
    }

    pub fn close_edit_menu(&mut self) {
        self.show_edit_menu = false;
    }

    pub fn is_edit_menu_open(&self) -> bool {
        self.show_edit_menu
    }
}

impl eframe::App for AnimatorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(delay) = self.controller.update(Instant::now()) {
            ctx.request_repaint_after(delay);
        }

        // Side panels first so the central panel gets the remaining space
        panels::toolbar(self, ctx);
        panels::bottom_bar(self, ctx);
        panels::timeline_panel(self, ctx);
        panels::tools_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::central_panel(self, ctx);

        panels::edit_menu(self, ctx);
        panels::dialogs(self, ctx);
    }
}
