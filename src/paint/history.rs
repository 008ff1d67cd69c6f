use crate::paint::buffer::{PixelBuffer, Snapshot};

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded snapshot stack with a cursor.
///
/// Invariant: when non-empty, `index < snapshots.len()` and the entry at
/// `index` is what the live buffer showed after the last record/undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintHistory {
    snapshots: Vec<Snapshot>,
    index: usize,
    capacity: usize,
}

impl Default for PaintHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PaintHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// History seeded with the buffer's current state.
    pub fn starting_from(buffer: &PixelBuffer, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history.record(buffer);
        history
    }

    /// Drops the redo branch, appends a copy of `buffer`, evicts the oldest
    /// entry when over capacity and moves the cursor to the newest entry.
    pub fn record(&mut self, buffer: &PixelBuffer) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.index + 1);
        }
        self.snapshots.push(buffer.snapshot());
        if self.snapshots.len() > self.capacity {
            let _ = self.snapshots.remove(0);
            tracing::debug!(capacity = self.capacity, "evicted oldest history snapshot");
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Discards everything and starts again from `buffer`.
    pub fn reset(&mut self, buffer: &PixelBuffer) {
        self.snapshots.clear();
        self.index = 0;
        self.record(buffer);
    }

    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        buffer.restore(&self.snapshots[self.index]);
        true
    }

    pub fn redo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        buffer.restore(&self.snapshots[self.index]);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.index < self.snapshots.len() - 1
    }

    /// Snapshot under the cursor; shape previews redraw on top of it.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
