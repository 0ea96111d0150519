//! # Undo/Redo History
//!
//! Full snapshots of the component list plus a cursor.
//!
//! ## Design
//!
//! - The history starts with one snapshot (the loaded document)
//! - Committing truncates any redo branch, appends, and advances the cursor
//! - Undo/redo only move the cursor; the caller swaps in the snapshot
//! - An optional level limit drops the oldest snapshots
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(doc.components.clone());
//!
//! history.commit(doc.components.clone());
//!
//! if let Some(snapshot) = history.undo() {
//!     doc.components = snapshot.to_vec();
//! }
//! ```

use pagecraft_model::Component;
use tracing::trace;

pub type Snapshot = Vec<Component>;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// History with unlimited undo levels
    pub fn new(initial: Snapshot) -> Self {
        Self::with_max_levels(initial, 0)
    }

    pub fn with_max_levels(initial: Snapshot, max_levels: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_levels,
        }
    }

    /// Record the state after a mutation
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;

        if self.max_levels > 0 {
            while self.snapshots.len() > self.max_levels + 1 {
                self.snapshots.remove(0);
                self.cursor -= 1;
            }
        }

        trace!(cursor = self.cursor, len = self.snapshots.len(), "Committed snapshot");
    }

    /// Step back; `None` when already at the oldest snapshot
    pub fn undo(&mut self) -> Option<&[Component]> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward; `None` when already at the newest snapshot
    pub fn redo(&mut self) -> Option<&[Component]> {
        if !self.can_redo() {
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

    /// Snapshot under the cursor
    pub fn current(&self) -> &[Component] {
        &self.snapshots[self.cursor]
    }

    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    pub fn redo_levels(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Forget everything and start over from `snapshot`
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.snapshots = vec![snapshot];
        self.cursor = 0;
    }
}
