use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::Compare;
use crate::NaturalOrder;

/// `extract_min` or `peek` on a heap with no elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no element to extract")
    }
}

impl std::error::Error for EmptyHeapError {}

/// `reduce` on a key that is not in the heap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not present in heap")
    }
}

impl std::error::Error for KeyNotFoundError {}

/// Binary min-heap of `(key, priority)` entries with a position index.
///
/// - `store` holds the entries in level order; `slots` maps each key to
///   its current slot and is updated together with every swap.
/// - Identity (`K`) and priority (`P`) are separate so `reduce` can
///   rewrite a priority without disturbing what the index hashes.
/// - `push`, `extract_min`, `reduce` are O(log n); `peek`, `contains`,
///   `priority_of` are O(1).
pub struct IndexedMinHeap<K, P, C = NaturalOrder> {
    store: Vec<(K, P)>,
    slots: HashMap<K, usize>,
    cmp: C,
}

impl<K: Hash + Eq + Clone, P: Ord> IndexedMinHeap<K, P> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Hash + Eq + Clone, P: Ord> Default for IndexedMinHeap<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, P, C: Compare<P>> IndexedMinHeap<K, P, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            store: Vec::new(),
            slots: HashMap::new(),
            cmp,
        }
    }

    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            cmp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    #[inline]
    pub fn priority_of(&self, key: &K) -> Option<&P> {
        let &slot = self.slots.get(key)?;
        Some(&self.store[slot].1)
    }

    pub fn peek(&self) -> Result<(&K, &P), EmptyHeapError> {
        match self.store.first() {
            Some((key, priority)) => Ok((key, priority)),
            None => Err(EmptyHeapError),
        }
    }

    /// Appends the entry and sifts it up to its slot.
    ///
    /// The key must not already be present; callers that may hold the key
    /// go through `reduce` instead.
    pub fn push(&mut self, key: K, priority: P) {
        debug_assert!(!self.slots.contains_key(&key), "duplicate key pushed");
        let slot = self.store.len();
        self.slots.insert(key.clone(), slot);
        self.store.push((key, priority));
        self.sift_up(slot);
    }

    /// Removes and returns the minimum entry.
    pub fn extract_min(&mut self) -> Result<(K, P), EmptyHeapError> {
        let last = match self.store.len() {
            0 => return Err(EmptyHeapError),
            n => n - 1,
        };

        self.swap_slots(0, last);
        let (key, priority) = match self.store.pop() {
            Some(entry) => entry,
            None => return Err(EmptyHeapError),
        };
        self.slots.remove(&key);

        if !self.store.is_empty() {
            self.sift_down(0);
        }
        Ok((key, priority))
    }

    /// Lowers the priority of a present key and sifts it up.
    ///
    /// Sifting up alone is enough: a lowered priority can only violate
    /// the heap order toward the root. Raising a priority through this
    /// method leaves the heap out of order.
    pub fn reduce(&mut self, key: &K, priority: P) -> Result<(), KeyNotFoundError> {
        let slot = match self.slots.get(key) {
            Some(&slot) => slot,
            None => return Err(KeyNotFoundError),
        };
        debug_assert!(
            self.cmp.compare(&priority, &self.store[slot].1) != Ordering::Greater,
            "reduce must not raise a priority"
        );
        self.store[slot].1 = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.cmp.compare(&self.store[child].1, &self.store[parent].1) != Ordering::Less {
                break;
            }
            self.swap_slots(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.store.len();
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len
                && self.cmp.compare(&self.store[right].1, &self.store[left].1) == Ordering::Less
            {
                right
            } else {
                left
            };

            // Ties stay put; only a strictly smaller child moves up.
            if self.cmp.compare(&self.store[child].1, &self.store[parent].1) != Ordering::Less {
                break;
            }
            self.swap_slots(parent, child);
            parent = child;
        }
    }

    /// Sole mutation of the position index: both entries move with the
    /// element swap.
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.store.swap(i, j);
        self.slots.insert(self.store[i].0.clone(), i);
        self.slots.insert(self.store[j].0.clone(), j);
    }
}
