use crate::document::Document;

/// Full-snapshot undo history. Each entry is an independent deep copy of the
/// document; restoring pops the most recent one. There is no redo: a consumed
/// snapshot is gone.
///
/// History depth is unbounded. Every mutation costs a full document copy, so
/// memory grows with session length; that tradeoff is intentional for the
/// snapshot-per-mutation design.
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    history: Vec<Document>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    /// Push a snapshot. The caller hands over an owned copy, so the history
    /// never aliases the live document.
    pub fn snapshot(&mut self, doc: Document) {
        self.history.push(doc);
    }

    /// Pop and return the most recent snapshot, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Document> {
        self.history.pop()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
