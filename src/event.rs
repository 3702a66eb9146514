/// Notifications emitted by the undo history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The undo or redo stack changed; re-query `can_undo`/`can_redo`
    CanUndoRedoChanged,
}

/// Receives [`HistoryEvent`]s, e.g. to refresh toolbar enable state.
///
/// Implemented for any `FnMut(&HistoryEvent)` closure.
pub trait EventHandler {
    fn handle_event(&mut self, event: &HistoryEvent);
}

impl<F: FnMut(&HistoryEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &HistoryEvent) {
        self(event)
    }
}
