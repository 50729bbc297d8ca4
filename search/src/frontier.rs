//! Best-first frontier with deterministic tie-breaking.
//!
//! Every insertion is stamped with a strictly increasing sequence number and
//! the heap orders by `(score, sequence)`. Items that tie on score therefore
//! pop in insertion order, whatever the heap implementation does internally.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// The frontier ordering key: lower `score` first, then older `sequence`.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub score: f64,
    pub sequence: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A frontier entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest score first).
#[derive(Debug)]
struct FrontierEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority queue that always pops the item with the lowest `key(item)`.
///
/// The key function is supplied at construction and evaluated once per
/// insertion. Popping an empty frontier yields `None`; the search engine
/// treats that as an invariant violation, never as "no solution".
pub struct Frontier<T, K> {
    heap: BinaryHeap<FrontierEntry<T>>,
    key: K,
    next_sequence: u64,
    high_water: usize,
}

impl<T, K> Frontier<T, K>
where
    K: Fn(&T) -> f64,
{
    /// Create a new empty frontier ordered by `key`.
    #[must_use]
    pub fn new(key: K) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Create a frontier ordered by `key` and add `items` in iteration order.
    #[must_use]
    pub fn with_items(key: K, items: impl IntoIterator<Item = T>) -> Self {
        let mut frontier = Self::new(key);
        for item in items {
            frontier.add(item);
        }
        frontier
    }

    /// Score `item` and insert it. Returns the key it was stored under.
    pub fn add(&mut self, item: T) -> FrontierKey {
        let key = FrontierKey {
            score: (self.key)(&item),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
        key
    }

    /// Remove and return the lowest-keyed item.
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Remove and return the lowest-keyed item together with its key.
    #[must_use]
    pub fn pop_with_key(&mut self) -> Option<(FrontierKey, T)> {
        self.heap.pop().map(|e| (e.key.0, e.item))
    }

    /// The item `pop` would return, without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.heap.peek().map(|e| &e.item)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Snapshot of every pending key, in the order they would be popped.
    #[must_use]
    pub fn entries(&self) -> Vec<FrontierKey> {
        let mut entries: Vec<FrontierKey> = self.heap.iter().map(|e| e.key.0).collect();
        entries.sort();
        entries
    }
}
