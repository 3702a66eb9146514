use crate::SchemeEditorApp;

pub fn history_panel(app: &mut SchemeEditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("history_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("History");

            let history = app.history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo: {}", history.undo_stack().len()));
                ui.label(format!("Redo: {}", history.redo_stack().len()));
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("command_history_grid")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Undo Stack");
                        ui.strong("Redo Stack");
                        ui.end_row();

                        // Most recent first on both sides
                        let undo: Vec<_> = history.undo_stack().iter().rev().collect();
                        let redo: Vec<_> = history.redo_stack().iter().rev().collect();

                        for i in 0..undo.len().max(redo.len()) {
                            match undo.get(i) {
                                Some(command) => ui.label(command.describe()),
                                None => ui.label(""),
                            };
                            match redo.get(i) {
                                Some(command) => ui.weak(command.describe()),
                                None => ui.label(""),
                            };
                            ui.end_row();
                        }
                    });
            });
        });
}
