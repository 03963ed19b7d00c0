use crate::app::AnimatorApp;
use crate::command::Command;

/// Frame buttons and the frame management controls.
pub fn timeline_panel(app: &mut AnimatorApp, ctx: &egui::Context) {
    let highlight = app.controller().session().config().timeline_highlight;
    let modal = app.controller().is_modal();

    egui::TopBottomPanel::bottom("timeline").show(ctx, |ui| {
        if modal {
            ui.disable();
        }
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                let project = app.controller().session().project();
                let current = project.current_index();
                let mut clicked = None;

                for index in 0..project.len() {
                    let label = (index + 1).to_string();
                    let button = if index == current {
                        egui::Button::new(egui::RichText::new(label).color(egui::Color32::BLACK))
                            .fill(highlight)
                    } else {
                        egui::Button::new(label)
                    };
                    if ui.add(button.min_size(egui::vec2(28.0, 20.0))).clicked() {
                        clicked = Some(index);
                    }
                }

                if let Some(index) = clicked {
                    app.controller_mut().dispatch(Command::SelectFrame(index));
                }
            });
        });

        ui.horizontal(|ui| {
            if ui.button("+ Frame").clicked() {
                app.controller_mut().dispatch(Command::AddFrame);
            }
            if ui.button("Duplicate").clicked() {
                app.controller_mut().dispatch(Command::DuplicateFrame);
            }
            if ui.button("Delete").clicked() {
                app.controller_mut().dispatch(Command::DeleteFrame);
            }
        });
    });
}

/// Bar holding the "+" button that opens the edit menu.
pub fn bottom_bar(app: &mut AnimatorApp, ctx: &egui::Context) {
    let modal = app.controller().is_modal();
    egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
        if modal {
            ui.disable();
        }
        ui.vertical_centered(|ui| {
            let plus = egui::Button::new(egui::RichText::new("+").size(20.0).strong());
            if ui.add(plus).clicked() {
                app.open_edit_menu();
            }
        });
    });
}
