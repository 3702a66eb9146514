use std::path::{Path, PathBuf};

use crate::command::{ColorSchemeHistory, StyleCommand};
use crate::error::{SchemeError, SchemeResult};
use crate::event::HistoryEvent;
use crate::panels;
use crate::scheme::ColorScheme;
use crate::settings::EditorSettings;
use crate::tree::{StyleTreeView, TreeStore};

const DEFAULT_SAVE_PATH: &str = "color-scheme.json";

/// The color scheme editor window
pub struct SchemeEditorApp {
    settings: EditorSettings,
    scheme_path: Option<PathBuf>,
    scheme_name: String,
    scheme_description: String,
    view: StyleTreeView,
    history: ColorSchemeHistory,
    /// Undo depth matching the file on disk, `None` once that state can't be reached
    saved_depth: Option<usize>,
    status: Option<String>,
}

impl Default for SchemeEditorApp {
    fn default() -> Self {
        Self::with_settings(EditorSettings::default())
    }
}

impl SchemeEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, scheme_path: Option<PathBuf>) -> Self {
        let settings: EditorSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self::with_settings(settings);

        let egui_ctx = cc.egui_ctx.clone();
        app.history
            .subscribe(move |_: &HistoryEvent| egui_ctx.request_repaint());

        if let Some(path) = scheme_path.or_else(|| app.settings.last_scheme_path.clone()) {
            app.open(path);
        }
        app
    }

    /// An editor showing the built-in scheme, without any window attached
    pub fn with_settings(settings: EditorSettings) -> Self {
        let scheme = ColorScheme::builtin();

        Self {
            settings,
            scheme_path: None,
            scheme_name: scheme.name.clone(),
            scheme_description: scheme.description.clone(),
            view: StyleTreeView::new(TreeStore::from_scheme(&scheme)),
            history: ColorSchemeHistory::new(),
            saved_depth: Some(0),
            status: None,
        }
    }

    /// Replace the edited scheme with the one stored at `path`
    pub fn open(&mut self, path: PathBuf) {
        match ColorScheme::load(&path) {
            Ok(scheme) => {
                self.load_scheme(&scheme);
                self.settings.last_scheme_path = Some(path.clone());
                self.scheme_path = Some(path);
                self.status = None;
            }
            Err(err) => {
                log::error!("Failed to open color scheme: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn load_scheme(&mut self, scheme: &ColorScheme) {
        self.view.set_store(TreeStore::from_scheme(scheme));
        self.scheme_name = scheme.name.clone();
        self.scheme_description = scheme.description.clone();
        self.history.clear();
        self.saved_depth = Some(0);
    }

    /// The scheme as currently edited
    pub fn current_scheme(&self) -> Option<ColorScheme> {
        self.view
            .store()
            .map(|store| store.to_scheme(&self.scheme_name, &self.scheme_description))
    }

    pub fn save_scheme(&mut self) {
        let path = self
            .scheme_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
        match self.save_to(&path) {
            Ok(()) => {
                self.settings.last_scheme_path = Some(path.clone());
                self.scheme_path = Some(path);
                self.status = None;
            }
            Err(err) => {
                log::error!("{err}");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Write the edited scheme to `path` and mark it saved
    pub fn save_to(&mut self, path: &Path) -> SchemeResult<()> {
        let scheme = self.current_scheme().ok_or(SchemeError::NoScheme)?;
        scheme.save(path)?;
        self.saved_depth = Some(self.history.undo_stack().len());
        Ok(())
    }

    /// Record an edit made in the tree
    pub fn apply_edit(&mut self, command: StyleCommand) {
        // The saved state sits on the redo stack, which this edit discards
        if self
            .saved_depth
            .is_some_and(|depth| depth > self.history.undo_stack().len())
        {
            self.saved_depth = None;
        }
        self.history.add_command(command, &mut self.view);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.view)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.view)
    }

    pub fn history(&self) -> &ColorSchemeHistory {
        &self.history
    }

    pub fn view(&self) -> &StyleTreeView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut StyleTreeView {
        &mut self.view
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn scheme_name(&self) -> &str {
        &self.scheme_name
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.saved_depth != Some(self.history.undo_stack().len())
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo) = ctx.input(|i| {
            let command = i.modifiers.command;
            let shift = i.modifiers.shift;
            let undo = command && !shift && i.key_pressed(egui::Key::Z);
            let redo = command
                && ((shift && i.key_pressed(egui::Key::Z)) || i.key_pressed(egui::Key::Y));
            (undo, redo)
        });

        if undo {
            self.undo();
        } else if redo {
            self.redo();
        }
    }
}

impl eframe::App for SchemeEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::toolbar(self, ctx);
        if self.settings.show_history {
            panels::history_panel(self, ctx);
        }
        panels::style_tree_panel(self, ctx);
    }
}
