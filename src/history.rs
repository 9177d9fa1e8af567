// src/history.rs - Bounded undo stack of buffer snapshots

use crate::buffer::Buffer;
use crate::position::Position;
use std::collections::VecDeque;

pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// Buffer state captured right before a destructive edit.
///
/// Cloning a rope shares its nodes, so a snapshot only costs the chunks the
/// following edit touches.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub buffer: Buffer,
    pub cursor: Position,
}

/// Undo history: LIFO pops, oldest entry evicted once capacity is reached
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }
}

impl UndoHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(DEFAULT_UNDO_CAPACITY)),
            capacity,
        }
    }

    pub fn push_snapshot(&mut self, buffer: &Buffer, cursor: Position) {
        if self.capacity == 0 {
            return;
        }
        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(Snapshot {
            buffer: buffer.clone(),
            cursor,
        });
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Buffer {
        Buffer::from_text(&format!("entry {}", n))
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut history = UndoHistory::default();
        history.push_snapshot(&numbered(1), Position::new(0, 1));
        history.push_snapshot(&numbered(2), Position::new(0, 2));

        let top = history.pop().unwrap();
        assert_eq!(top.buffer, numbered(2));
        assert_eq!(top.cursor, Position::new(0, 2));
        assert_eq!(history.pop().unwrap().buffer, numbered(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_empty_pop_is_none() {
        let mut history = UndoHistory::default();
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let capacity = 3;
        let mut history = UndoHistory::with_capacity(capacity);
        for n in 1..=capacity + 1 {
            history.push_snapshot(&numbered(n), Position::zero());
        }
        assert_eq!(history.len(), capacity);

        let mut survivors = Vec::new();
        while let Some(snapshot) = history.pop() {
            survivors.push(snapshot.buffer);
        }
        assert_eq!(survivors.first(), Some(&numbered(capacity + 1)));
        assert!(!survivors.contains(&numbered(1)));
        assert!(survivors.contains(&numbered(2)));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = UndoHistory::with_capacity(0);
        history.push_snapshot(&numbered(1), Position::zero());
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_snapshot_is_independent_of_live_buffer() {
        let mut history = UndoHistory::default();
        let mut buffer = Buffer::from_text("abc");
        history.push_snapshot(&buffer, Position::zero());
        buffer.insert_char(0, 3, 'd').unwrap();

        assert_eq!(history.pop().unwrap().buffer.line(0).unwrap(), "abc");
        assert_eq!(buffer.line(0).unwrap(), "abcd");
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 0usize..20, pushes in 0usize..60) {
            let mut history = UndoHistory::with_capacity(capacity);
            for n in 0..pushes {
                history.push_snapshot(&numbered(n), Position::zero());
                prop_assert!(history.len() <= capacity);
            }
            prop_assert_eq!(history.len(), pushes.min(capacity));
        }
    }
}
