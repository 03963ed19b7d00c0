use crate::app::AnimatorApp;
use crate::command::Command;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut AnimatorApp, ctx: &egui::Context) {
    let modal = app.controller().is_modal();
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(90.0)
        .show(ctx, |ui| {
            if modal {
                ui.disable();
            }
            ui.heading("Tools");

            let active = app.controller().session().tool_kind();
            for kind in ToolKind::ALL {
                let button = egui::Button::new(kind.label()).selected(active == kind);
                if ui.add_sized([ui.available_width(), 24.0], button).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    app.controller_mut().dispatch(Command::SetTool(kind));
                }
            }
        });
}
