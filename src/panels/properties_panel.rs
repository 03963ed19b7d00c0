use crate::app::AnimatorApp;
use crate::command::Command;
use crate::config::BRUSH_SIZE_RANGE;

pub fn properties_panel(app: &mut AnimatorApp, ctx: &egui::Context) {
    let modal = app.controller().is_modal();
    egui::SidePanel::right("properties_panel")
        .resizable(false)
        .exact_width(170.0)
        .show(ctx, |ui| {
            if modal {
                ui.disable();
            }
            ui.heading("Properties");
            ui.separator();

            let session = app.controller().session();
            ui.label("Tool:");
            ui.colored_label(egui::Color32::YELLOW, session.tool_kind().label());

            ui.add_space(10.0);
            ui.label("Brush size:");
            let mut size = session.brush().size;
            if ui.add(egui::Slider::new(&mut size, BRUSH_SIZE_RANGE)).changed() {
                app.controller_mut().dispatch(Command::SetBrushSize(size));
            }

            ui.add_space(15.0);
            ui.label("Onion skin:");
            let mut onion = app.controller().session().onion_skin();
            if ui.checkbox(&mut onion, "Show previous frame").changed() {
                app.controller_mut().dispatch(Command::SetOnionSkin(onion));
            }
        });
}
