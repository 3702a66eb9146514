use crate::SchemeEditorApp;
use crate::command::StyleCommand;
use crate::style::{AmbientColor, ChunkStyle, FontStyle, FontWeight, SchemeColor, StyleValue};
use crate::tree::{NodeId, TreeStore, TreeView};

/// Color given to a style that had no color of that kind before
const NEW_COLOR: SchemeColor = SchemeColor::rgb(0xa0, 0xa0, 0xa0);

pub fn style_tree_panel(app: &mut SchemeEditorApp, ctx: &egui::Context) {
    let scroll_to = app.view_mut().take_scroll_target();
    let selected = app.view().selected();
    let mut clicked = None;
    let mut edits = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(store) = app.view().store() else {
            ui.label("No color scheme loaded");
            return;
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for &root in store.roots() {
                    // Undo/redo may target a row inside a collapsed category
                    let reveal = scroll_to.and_then(|id| store.parent(id)) == Some(root);

                    egui::CollapsingHeader::new(store.label(root).unwrap_or_default())
                        .id_salt(root.index())
                        .default_open(true)
                        .open(reveal.then_some(true))
                        .show(ui, |ui| {
                            for &id in store.children(root) {
                                let row = Row {
                                    id,
                                    selected: selected == Some(id),
                                    scroll: scroll_to == Some(id),
                                };
                                style_row(ui, store, row, &mut clicked, &mut edits);
                            }
                        });
                }
            });
    });

    if let Some(id) = clicked {
        app.view_mut().select_row(id);
    }
    for edit in edits {
        app.apply_edit(edit);
    }
}

#[derive(Clone, Copy)]
struct Row {
    id: NodeId,
    selected: bool,
    scroll: bool,
}

fn style_row(
    ui: &mut egui::Ui,
    store: &TreeStore,
    row: Row,
    clicked: &mut Option<NodeId>,
    edits: &mut Vec<StyleCommand>,
) {
    let (Some(property), Some(value)) = (store.property(row.id), store.value(row.id)) else {
        return;
    };

    ui.horizontal(|ui| {
        let mut response = ui.selectable_label(row.selected, property.name.as_str());
        if !property.description.is_empty() {
            response = response.on_hover_text(property.description.as_str());
        }
        if response.clicked() {
            *clicked = Some(row.id);
        }
        if row.scroll {
            response.scroll_to_me(Some(egui::Align::Center));
        }

        let mut edited = *value;
        let changed = match &mut edited {
            StyleValue::Chunk(style) => chunk_style_editor(ui, style),
            StyleValue::Ambient(color) => ambient_color_editor(ui, color),
        };

        if changed && edited != *value {
            if let Some(command) = StyleCommand::between(&property.name, *value, edited) {
                edits.push(command);
            }
        }
    });
}

fn chunk_style_editor(ui: &mut egui::Ui, style: &mut ChunkStyle) -> bool {
    let mut changed = optional_color(ui, "fg", &mut style.foreground);
    changed |= optional_color(ui, "bg", &mut style.background);

    let mut bold = style.is_bold();
    if ui.checkbox(&mut bold, "Bold").changed() {
        style.font_weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
        changed = true;
    }

    let mut italic = style.is_italic();
    if ui.checkbox(&mut italic, "Italic").changed() {
        style.font_style = if italic { FontStyle::Italic } else { FontStyle::Normal };
        changed = true;
    }

    changed
}

fn ambient_color_editor(ui: &mut egui::Ui, color: &mut AmbientColor) -> bool {
    let mut changed = ui
        .color_edit_button_srgba_unmultiplied(color.color.as_mut_array())
        .changed();
    changed |= optional_color(ui, "second", &mut color.second_color);
    changed |= optional_color(ui, "border", &mut color.border_color);
    changed
}

fn optional_color(ui: &mut egui::Ui, label: &str, color: &mut Option<SchemeColor>) -> bool {
    ui.label(label);

    let mut changed = false;
    if let Some(value) = color.as_mut() {
        changed |= ui
            .color_edit_button_srgba_unmultiplied(value.as_mut_array())
            .changed();
    }

    if color.is_some() {
        if ui.small_button("x").on_hover_text("Remove color").clicked() {
            *color = None;
            changed = true;
        }
    } else if ui.small_button("+").on_hover_text("Add color").clicked() {
        *color = Some(NEW_COLOR);
        changed = true;
    }

    changed
}
