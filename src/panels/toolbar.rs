use crate::app::{APP_TITLE, AnimatorApp};
use crate::command::Command;

pub fn toolbar(app: &mut AnimatorApp, ctx: &egui::Context) {
    let modal = app.controller().is_modal();
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        if modal {
            ui.disable();
        }
        ui.horizontal(|ui| {
            ui.strong(APP_TITLE);
            ui.separator();

            if ui.button("New").clicked() {
                app.controller_mut().request_new_project();
            }
            if ui.button("Save (WIP)").clicked() {
                app.controller_mut().dispatch(Command::Save);
            }
            if ui.button("Open (WIP)").clicked() {
                app.controller_mut().dispatch(Command::Open);
            }
            ui.separator();

            if ui.button("Play").clicked() {
                app.controller_mut().dispatch(Command::Play);
            }
            if ui.button("Stop").clicked() {
                app.controller_mut().dispatch(Command::Stop);
            }

            ui.label("FPS:");
            let controller = app.controller_mut();
            let field = ui.add(
                egui::TextEdit::singleline(&mut controller.fps_field).desired_width(28.0),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Set").clicked() || submitted {
                controller.apply_fps_field();
            }
        });
    });
}
