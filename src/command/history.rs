use std::fmt;

use super::StyleCommand;
use crate::event::{EventHandler, HistoryEvent};
use crate::locator::locate;
use crate::tree::{NodeId, TreeView};

#[derive(Debug, Clone, Copy)]
enum Write {
    Apply,
    Revert,
}

/// Undo/redo history of the color scheme editor.
///
/// Commands are replayed against whichever [`TreeView`] is passed in; the row a
/// command targets is looked up by style name on every replay. A command whose
/// row cannot be found still moves between the stacks, only the write is skipped.
#[derive(Default)]
pub struct ColorSchemeHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<StyleCommand>,
    /// Stack of commands that can be redone
    redo_stack: Vec<StyleCommand>,
    /// Told about every change to either stack, in subscription order
    observers: Vec<Box<dyn EventHandler>>,
}

impl fmt::Debug for ColorSchemeHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeHistory")
            .field("undo_stack", &self.undo_stack)
            .field("redo_stack", &self.redo_stack)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ColorSchemeHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for [`HistoryEvent::CanUndoRedoChanged`]
    pub fn subscribe(&mut self, handler: impl EventHandler + 'static) {
        self.observers.push(Box::new(handler));
    }

    /// Record a new edit and apply it to the view
    pub fn add_command<V: TreeView + ?Sized>(&mut self, command: StyleCommand, view: &mut V) {
        self.redo_stack.clear();
        Self::write(&command, view, Write::Apply);
        log::debug!("Recorded {}", command.describe());
        self.undo_stack.push(command);
        self.notify();
    }

    /// Undo the last command. Returns false if there was nothing to undo.
    pub fn undo<V: TreeView + ?Sized>(&mut self, view: &mut V) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        let node = Self::write(&command, view, Write::Revert);
        log::debug!("Undid {}", command.describe());
        self.redo_stack.push(command);
        if let Some(node) = node {
            Self::select_and_scroll(view, node);
        }
        self.notify();
        true
    }

    /// Redo the last undone command. Returns false if there was nothing to redo.
    pub fn redo<V: TreeView + ?Sized>(&mut self, view: &mut V) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        let node = Self::write(&command, view, Write::Apply);
        log::debug!("Redid {}", command.describe());
        self.undo_stack.push(command);
        if let Some(node) = node {
            Self::select_and_scroll(view, node);
        }
        self.notify();
        true
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Commands that can be undone, most recent last
    pub fn undo_stack(&self) -> &[StyleCommand] {
        &self.undo_stack
    }

    /// Commands that can be redone, next to redo last
    pub fn redo_stack(&self) -> &[StyleCommand] {
        &self.redo_stack
    }

    /// Forget every command, e.g. after loading another scheme
    pub fn clear(&mut self) {
        if self.undo_stack.is_empty() && self.redo_stack.is_empty() {
            return;
        }
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.handle_event(&HistoryEvent::CanUndoRedoChanged);
        }
    }

    fn write<V: TreeView + ?Sized>(
        command: &StyleCommand,
        view: &mut V,
        write: Write,
    ) -> Option<NodeId> {
        let node = match locate(&*view, command.style_name()) {
            Ok(node) => node,
            Err(err) => {
                log::warn!("Skipping {write:?} of {}: {err}", command.describe());
                return None;
            }
        };
        let store = view.data_source_mut()?;
        match write {
            Write::Apply => command.apply(store, node),
            Write::Revert => command.revert(store, node),
        }
        Some(node)
    }

    fn select_and_scroll<V: TreeView + ?Sized>(view: &mut V, node: NodeId) {
        view.select_row(node);
        view.scroll_to_row(node);
    }
}
