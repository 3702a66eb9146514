#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod error;
pub mod event;
pub mod locator;
pub mod panels;
pub mod scheme;
pub mod settings;
pub mod style;
pub mod tree;

pub use app::SchemeEditorApp;
pub use command::{ColorSchemeHistory, StyleCommand};
pub use error::{LocateError, SchemeError};
pub use event::{EventHandler, HistoryEvent};
pub use locator::{find_node, locate};
pub use scheme::ColorScheme;
pub use settings::EditorSettings;
pub use style::{AmbientColor, ChunkStyle, SchemeColor, StyleValue};
pub use tree::{NodeId, StyleTreeView, TreeStore, TreeView};
