use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Editor preferences restored between sessions through eframe's storage.
///
/// Undo history is deliberately not part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    /// Scheme opened on startup when none is given on the command line
    pub last_scheme_path: Option<PathBuf>,
    /// Show the undo/redo stacks next to the tree
    pub show_history: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            last_scheme_path: None,
            show_history: true,
        }
    }
}
