//! Bounded delete history.
//!
//! Holds the most recently deleted tasks, newest at the back. Once full, a
//! new deletion evicts the oldest entry for good. The board runs with a depth
//! of one, so deleting twice without an undo loses the first task.

use std::collections::VecDeque;

use crate::task::Task;

pub const DEFAULT_HISTORY_DEPTH: usize = 1;

#[derive(Debug, Clone)]
pub struct DeleteHistory {
    entries: VecDeque<Task>,
    capacity: usize,
}

impl DeleteHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_DEPTH)
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a deletion. Returns the evicted task when the history was full.
    pub fn push(&mut self, task: Task) -> Option<Task> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(task);
        evicted
    }

    pub fn pop(&mut self) -> Option<Task> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&Task> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DeleteHistory {
    fn default() -> Self {
        Self::new()
    }
}
