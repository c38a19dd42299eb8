//! Undo/redo history — whole-buffer snapshots.
//!
//! Every mutating command saves the buffer *before* it changes anything
//! ([`History::save`]); leaving insert mode saves the result as well, so the
//! next command's save collapses into a no-op. Undo and redo move snapshots
//! between the two stacks:
//!
//! - [`save`](History::save) pushes onto the undo stack only when the buffer
//!   differs from the stack's top, and clears the redo stack.
//! - [`undo`](History::undo) hands back the previous snapshot and remembers
//!   the current buffer on the redo stack; [`redo`](History::redo) mirrors it.
//!
//! Both restore operations first discard stack entries equal to the current
//! buffer. The save-on-escape discipline otherwise leaves the just-edited
//! text on top of the stack, which would make the first undo after an insert
//! session restore the text it started from.
//!
//! The stacks are capped (default [`DEFAULT_DEPTH`]); the oldest snapshot is
//! evicted first. Branching history is not supported — a new save after an
//! undo discards the forward history.

use tracing::trace;

/// Default maximum number of undo snapshots retained.
pub const DEFAULT_DEPTH: usize = 100;

/// Snapshot-based undo/redo stacks for a single buffer.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    depth: usize,
}

impl History {
    /// Create an empty history with the default depth cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an empty history retaining at most `depth` snapshots.
    ///
    /// A depth of 0 disables undo entirely.
    #[must_use]
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            depth,
        }
    }

    /// Number of undo snapshots currently held.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo snapshots currently held.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Save `current` as an undo snapshot.
    ///
    /// No-op when it equals the top of the undo stack; otherwise the redo
    /// stack is cleared — any mutation after an undo discards forward
    /// history.
    pub fn save(&mut self, current: &str) {
        if self.depth == 0 {
            return;
        }
        if self.undo_stack.last().map(String::as_str) == Some(current) {
            return;
        }
        self.push_undo(current.to_string());
        self.redo_stack.clear();
        trace!(depth = self.undo_stack.len(), "undo snapshot saved");
    }

    /// Undo: returns the snapshot to restore, or `None` when there is
    /// nothing to undo. `current` is remembered for redo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        while self.undo_stack.last().map(String::as_str) == Some(current) {
            self.undo_stack.pop();
        }
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        trace!(remaining = self.undo_stack.len(), "undo");
        Some(restored)
    }

    /// Redo: returns the snapshot to restore, or `None` when there is
    /// nothing to redo. `current` is remembered for undo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        while self.redo_stack.last().map(String::as_str) == Some(current) {
            self.redo_stack.pop();
        }
        let restored = self.redo_stack.pop()?;
        self.push_undo(current.to_string());
        trace!(remaining = self.redo_stack.len(), "redo");
        Some(restored)
    }

    /// Forget everything (used when the host replaces the buffer wholesale).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: String) {
        if self.undo_stack.len() >= self.depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let h = History::new();
        assert_eq!(h.undo_depth(), 0);
        assert_eq!(h.redo_depth(), 0);
    }

    #[test]
    fn undo_on_empty_is_none() {
        let mut h = History::new();
        assert_eq!(h.undo("x"), None);
        assert_eq!(h.redo("x"), None);
    }

    #[test]
    fn save_then_undo_restores() {
        let mut h = History::new();
        h.save("old");
        assert_eq!(h.undo("new").as_deref(), Some("old"));
    }

    #[test]
    fn save_skips_duplicate_top() {
        let mut h = History::new();
        h.save("same");
        h.save("same");
        assert_eq!(h.undo_depth(), 1);
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut h = History::new();
        h.save("v1");
        let restored = h.undo("v2").unwrap();
        assert_eq!(restored, "v1");
        assert_eq!(h.redo("v1").as_deref(), Some("v2"));
    }

    #[test]
    fn save_clears_redo() {
        let mut h = History::new();
        h.save("v1");
        h.undo("v2");
        assert_eq!(h.redo_depth(), 1);
        h.save("v3");
        assert_eq!(h.redo_depth(), 0);
    }

    #[test]
    fn duplicate_save_does_not_clear_redo() {
        // save() only acts when the buffer differs from the stack top, so a
        // redundant save right after an undo must keep the redo stack.
        let mut h = History::new();
        h.save("v1");
        let cur = h.undo("v2").unwrap();
        h.save(&cur);
        assert_eq!(h.redo_depth(), 1);
    }

    #[test]
    fn undo_skips_entries_equal_to_current() {
        // Simulates an insert session: save("") on enter, save("hello") on
        // escape. One undo must reach "" in a single step.
        let mut h = History::new();
        h.save("");
        h.save("hello");
        assert_eq!(h.undo("hello").as_deref(), Some(""));
        assert_eq!(h.redo("").as_deref(), Some("hello"));
    }

    #[test]
    fn depth_cap_evicts_oldest() {
        let mut h = History::with_depth(3);
        for i in 0..5 {
            h.save(&format!("v{i}"));
        }
        assert_eq!(h.undo_depth(), 3);
        assert_eq!(h.undo("v5").as_deref(), Some("v4"));
        assert_eq!(h.undo("v4").as_deref(), Some("v3"));
        assert_eq!(h.undo("v3").as_deref(), Some("v2"));
        assert_eq!(h.undo("v2"), None);
    }

    #[test]
    fn zero_depth_disables_undo() {
        let mut h = History::with_depth(0);
        h.save("v1");
        assert_eq!(h.undo("v2"), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut h = History::new();
        h.save("v1");
        h.undo("v2");
        h.clear();
        assert_eq!(h.undo_depth(), 0);
        assert_eq!(h.redo_depth(), 0);
    }
}
