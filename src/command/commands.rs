use crate::style::{AmbientColor, ChunkStyle, StyleValue};
use crate::tree::{NodeId, TreeStore};

/// A reversible edit of one style row
#[derive(Debug, Clone, PartialEq)]
pub enum StyleCommand {
    ChangeChunkStyle {
        style_name: String,
        old: ChunkStyle,
        new: ChunkStyle,
    },
    ChangeAmbientColor {
        style_name: String,
        old: AmbientColor,
        new: AmbientColor,
    },
}

impl StyleCommand {
    pub fn chunk_style(style_name: impl Into<String>, old: ChunkStyle, new: ChunkStyle) -> Self {
        Self::ChangeChunkStyle {
            style_name: style_name.into(),
            old,
            new,
        }
    }

    pub fn ambient_color(
        style_name: impl Into<String>,
        old: AmbientColor,
        new: AmbientColor,
    ) -> Self {
        Self::ChangeAmbientColor {
            style_name: style_name.into(),
            old,
            new,
        }
    }

    /// Builds the command for changing a row from `old` to `new`.
    /// Returns `None` if the two values are of different kinds.
    pub fn between(style_name: &str, old: StyleValue, new: StyleValue) -> Option<Self> {
        match (old, new) {
            (StyleValue::Chunk(old), StyleValue::Chunk(new)) => {
                Some(Self::chunk_style(style_name, old, new))
            }
            (StyleValue::Ambient(old), StyleValue::Ambient(new)) => {
                Some(Self::ambient_color(style_name, old, new))
            }
            _ => None,
        }
    }

    /// Name of the style row this command edits
    pub fn style_name(&self) -> &str {
        match self {
            Self::ChangeChunkStyle { style_name, .. }
            | Self::ChangeAmbientColor { style_name, .. } => style_name,
        }
    }

    pub fn old_value(&self) -> StyleValue {
        match self {
            Self::ChangeChunkStyle { old, .. } => StyleValue::Chunk(*old),
            Self::ChangeAmbientColor { old, .. } => StyleValue::Ambient(*old),
        }
    }

    pub fn new_value(&self) -> StyleValue {
        match self {
            Self::ChangeChunkStyle { new, .. } => StyleValue::Chunk(*new),
            Self::ChangeAmbientColor { new, .. } => StyleValue::Ambient(*new),
        }
    }

    /// Writes the new value into the row
    pub fn apply(&self, store: &mut TreeStore, node: NodeId) {
        store.set_value(node, self.new_value());
    }

    /// Writes the old value back into the row
    pub fn revert(&self, store: &mut TreeStore, node: NodeId) {
        store.set_value(node, self.old_value());
    }

    /// Short label for the history panel
    pub fn describe(&self) -> String {
        match self {
            Self::ChangeChunkStyle { style_name, .. } => format!("Change style \"{style_name}\""),
            Self::ChangeAmbientColor { style_name, .. } => format!("Change color \"{style_name}\""),
        }
    }
}
