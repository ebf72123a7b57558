//! History Model
//!
//! Undo/redo stacks of executed rename batches. Pure stack bookkeeping;
//! the actual reverse renames happen in the app layer.

use super::types::RenameBatch;

/// Stacks are bounded so a long session cannot grow without limit;
/// the oldest batch falls off first.
pub const MAX_HISTORY: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct HistoryModel {
    undo_stack: Vec<RenameBatch>,
    redo_stack: Vec<RenameBatch>,
}

impl HistoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly executed batch. Clears the redo stack: a new
    /// batch forks history and the old redo line is no longer valid.
    pub fn push_batch(&mut self, batch: RenameBatch) {
        self.undo_stack.push(batch);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Take the newest batch for undoing.
    pub fn pop_undo(&mut self) -> Option<RenameBatch> {
        self.undo_stack.pop()
    }

    /// Record a batch that was just undone so it can be redone.
    pub fn push_redo(&mut self, batch: RenameBatch) {
        self.redo_stack.push(batch);
        if self.redo_stack.len() > MAX_HISTORY {
            self.redo_stack.remove(0);
        }
    }

    /// Take the newest undone batch for redoing.
    pub fn pop_redo(&mut self) -> Option<RenameBatch> {
        self.redo_stack.pop()
    }

    /// Re-record a redone batch on the undo stack without clearing redo.
    pub fn push_undo_preserving_redo(&mut self, batch: RenameBatch) {
        self.undo_stack.push(batch);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
