use crate::app::AnimatorApp;
use crate::input::RawPointer;

pub fn central_panel(app: &mut AnimatorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            let size = app.renderer().canvas_size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input. A dialog blocks new gestures, one already
            // running still gets its release.
            let mut raw = RawPointer::sample(ctx, &response);
            if app.controller().is_modal() {
                raw.over_canvas = false;
            }
            let events = app.input_mut().process(raw, canvas_rect);
            for event in &events {
                app.controller_mut().handle_pointer(event);
            }

            // Render the canvas
            app.renderer()
                .render(&painter, canvas_rect.min, app.controller().session());
        });
    });
}
