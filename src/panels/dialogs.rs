use crate::app::AnimatorApp;
use crate::command::Command;
use crate::controller::NoticeKind;

/// Small window mirroring the frame commands, opened from the bottom bar.
pub fn edit_menu(app: &mut AnimatorApp, ctx: &egui::Context) {
    if !app.is_edit_menu_open() {
        return;
    }

    let mut open = true;
    let modal = app.controller().is_modal();
    egui::Window::new("Edit Menu")
        .enabled(!modal)
        .collapsible(false)
        .resizable(false)
        .fixed_size([250.0, 250.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Edit Tools");
                let width = 160.0;
                let entries = [
                    ("Add Frame", Command::AddFrame),
                    ("Duplicate Frame", Command::DuplicateFrame),
                    ("Delete Frame", Command::DeleteFrame),
                    ("Clear Selection", Command::ClearSelection),
                ];
                for (label, command) in entries {
                    if ui.add_sized([width, 24.0], egui::Button::new(label)).clicked() {
                        app.controller_mut().dispatch(command);
                    }
                }
                ui.add_space(10.0);
                if ui.add_sized([width, 24.0], egui::Button::new("Close")).clicked() {
                    app.close_edit_menu();
                }
            });
        });

    if !open {
        app.close_edit_menu();
    }
}

/// New-project confirmation and the notice queue.
pub fn dialogs(app: &mut AnimatorApp, ctx: &egui::Context) {
    if app.controller().is_confirming_new_project() {
        egui::Window::new("New Project")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Start a new project?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        app.controller_mut().answer_new_project(true);
                    }
                    if ui.button("No").clicked() {
                        app.controller_mut().answer_new_project(false);
                    }
                });
            });
    }

    let Some(notice) = app.controller().current_notice().cloned() else {
        return;
    };
    egui::Window::new(notice.title)
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color = match notice.kind {
                NoticeKind::Info => ui.visuals().text_color(),
                NoticeKind::Error => ui.visuals().error_fg_color,
            };
            ui.colored_label(color, notice.message.as_str());
            if ui.button("OK").clicked() {
                app.controller_mut().dismiss_notice();
            }
        });
}
