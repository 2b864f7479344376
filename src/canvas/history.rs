//! Snapshot history for undo
//!
//! Each entry is a full deep copy of the canvas pixel buffer, pushed
//! before a destructive operation (stroke begin, clear). Entries are
//! owned exclusively by the stack and never mutated after push.

use super::Rgba;

/// A stack of canvas snapshots, bounded only by memory
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<Vec<Rgba>>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot. The stack takes ownership.
    pub fn push(&mut self, snapshot: Vec<Rgba>) {
        self.entries.push(snapshot);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Vec<Rgba>> {
        self.entries.pop()
    }

    /// Drop all entries without touching the live canvas
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut history = HistoryStack::new();
        history.push(vec![Rgba::BLACK]);
        history.push(vec![Rgba::WHITE]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap()[0], Rgba::WHITE);
        assert_eq!(history.pop().unwrap()[0], Rgba::BLACK);
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_entries_survive_later_pushes() {
        let mut history = HistoryStack::new();
        let snapshot = vec![Rgba::TRANSPARENT; 16];
        history.push(snapshot);
        history.push(vec![Rgba::BLACK; 16]);
        history.pop();

        let first = history.pop().unwrap();
        assert!(first.iter().all(|p| *p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_reset() {
        let mut history = HistoryStack::new();
        history.push(vec![Rgba::BLACK]);
        history.reset();
        assert!(history.is_empty());
    }
}
