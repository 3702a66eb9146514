use crate::SchemeEditorApp;

pub fn toolbar(app: &mut SchemeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let can_undo = app.history().can_undo();
            let can_redo = app.history().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }

            ui.separator();

            if ui.button("Save scheme").clicked() {
                app.save_scheme();
            }
            ui.checkbox(&mut app.settings_mut().show_history, "History");

            ui.separator();

            let title = if app.has_unsaved_changes() {
                format!("{} *", app.scheme_name())
            } else {
                app.scheme_name().to_owned()
            };
            ui.strong(title);

            if let Some(status) = app.status() {
                ui.colored_label(ui.visuals().error_fg_color, status);
            }
        });
    });
}
