//! Recency-based short-term memory for tabu search.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A FIFO tabu list with O(1) membership checks.
///
/// An explicit queue decides eviction order; the lookup map refcounts keys so
/// the same move inserted twice stays tabu until both entries expire.
/// The list never holds more than `tenure` entries. Tenure 0 disables it:
/// inserts are dropped and nothing is ever tabu.
#[derive(Debug, Clone)]
pub struct TabuList<K: Eq + Hash + Clone> {
    tenure: usize,
    queue: VecDeque<K>,
    active: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> TabuList<K> {
    /// Creates an empty list with the given tenure.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure),
            active: HashMap::with_capacity(tenure),
        }
    }

    /// Marks a move as tabu, evicting the oldest entry past the tenure.
    pub fn insert(&mut self, key: K) {
        if self.tenure == 0 {
            return;
        }

        self.queue.push_back(key.clone());
        *self.active.entry(key).or_insert(0) += 1;

        while self.queue.len() > self.tenure {
            if let Some(old) = self.queue.pop_front() {
                if let Some(count) = self.active.get_mut(&old) {
                    *count -= 1;
                    if *count == 0 {
                        self.active.remove(&old);
                    }
                }
            }
        }
    }

    /// Whether a move is currently forbidden.
    pub fn contains(&self, key: &K) -> bool {
        self.active.contains_key(key)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
