//! Bounded FIFO of previously selected candidates.

use std::collections::VecDeque;

/// Selection history capped at a fixed capacity; oldest entries are evicted
/// on overflow. Capacity 0 disables tracking: `record` becomes a no-op.
///
/// Purely observational — nothing here feeds back into sampling.
#[derive(Debug, Clone)]
pub(crate) struct SelectionHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> SelectionHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn record(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
    }

    /// Oldest → newest.
    pub fn snapshot(&self) -> Vec<&T> {
        self.entries.iter().collect()
    }

    /// The `n` most recent entries, oldest → newest.
    pub fn last_n(&self, n: usize) -> Vec<&T> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.entries.contains(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
