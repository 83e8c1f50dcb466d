use crate::model::WorkflowTree;

/// Controls which mutations are recorded as history snapshots.
///
/// The default mirrors the behavior this crate was extracted from: structural
/// mutations (add, delete, import, reset) commit a snapshot, while label
/// edits mutate the live tree silently so that typing does not flood the undo
/// log. Set `record_label_edits` to make label edits undoable as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryPolicy {
    pub record_label_edits: bool,
}

/// Linear undo/redo history: an ordered sequence of full tree snapshots plus
/// a cursor into it. The cursor always points at a valid snapshot.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    snapshots: Vec<WorkflowTree>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new(initial: WorkflowTree) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Commits a new snapshot: any redo-able future beyond the cursor is
    /// discarded, the snapshot is appended, and the cursor advances to it.
    pub fn commit(&mut self, snapshot: WorkflowTree) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps the cursor back one snapshot. Returns the snapshot now at the
    /// cursor, or `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&WorkflowTree> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps the cursor forward one snapshot. Returns the snapshot now at the
    /// cursor, or `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&WorkflowTree> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &WorkflowTree {
        &self.snapshots[self.cursor]
    }

    /// Drops all history and starts over from a single snapshot.
    pub fn reset(&mut self, initial: WorkflowTree) {
        self.snapshots = vec![initial];
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
