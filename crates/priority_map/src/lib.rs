use std::fmt;
use std::hash::Hash;

use indexed_heap::IndexedMinHeap;

pub use indexed_heap::Compare;

/// `extract_min` on a frontier with no entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyFrontierError;

impl fmt::Display for EmptyFrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no entry to extract")
    }
}

impl std::error::Error for EmptyFrontierError {}

/// Key-to-value map ordered by the values under an injected comparator.
///
/// - `set` unifies insert and update: absent keys are pushed, present
///   keys are overwritten and re-sifted. Updates must be comparator
///   decreases; the caller guarantees it.
/// - The indexed heap stores the `(key, value)` entries itself, so the
///   map view and the heap cannot drift apart: `get`, `contains` and
///   `len` read the heap's position index in O(1).
pub struct PriorityMap<K, V, C: Compare<V>> {
    heap: IndexedMinHeap<K, V, C>,
}

impl<K: Hash + Eq + Clone, V, C: Compare<V>> PriorityMap<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: IndexedMinHeap::with_comparator(cmp),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.heap.contains(key)
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.heap.priority_of(key)
    }

    /// Inserts the value when the key is absent, otherwise overwrites it
    /// and restores the ordering with a decrease-key sift.
    pub fn set(&mut self, key: K, value: V) {
        if self.heap.contains(&key) {
            let updated = self.heap.reduce(&key, value);
            debug_assert!(updated.is_ok());
        } else {
            self.heap.push(key, value);
        }
    }

    /// Removes and returns the entry whose value is minimal under the
    /// comparator.
    pub fn extract_min(&mut self) -> Result<(K, V), EmptyFrontierError> {
        self.heap.extract_min().map_err(|_| EmptyFrontierError)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::PriorityMap;

    fn by_value(a: &u64, b: &u64) -> std::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn set_twice_keeps_single_entry() {
        let mut pm = PriorityMap::with_comparator(by_value);
        pm.set("a", 10_u64);
        pm.set("b", 15);
        pm.set("b", 5);

        assert_eq!(pm.len(), 2);
        assert_eq!(pm.get(&"b"), Some(&5));
        assert_eq!(pm.extract_min().unwrap(), ("b", 5));
        assert_eq!(pm.extract_min().unwrap(), ("a", 10));
        assert!(pm.extract_min().is_err());
    }

    #[test]
    fn get_and_contains_track_membership() {
        let mut pm = PriorityMap::with_comparator(by_value);
        assert!(!pm.contains(&1));
        assert_eq!(pm.get(&1), None);

        pm.set(1_u32, 7_u64);
        assert!(pm.contains(&1));
        assert_eq!(pm.get(&1), Some(&7));

        pm.extract_min().unwrap();
        assert!(!pm.contains(&1));
        assert!(pm.is_empty());
    }

    #[test]
    fn update_reorders_extraction() {
        let mut pm = PriorityMap::with_comparator(by_value);
        pm.set('x', 30_u64);
        pm.set('y', 20);
        pm.set('z', 10);
        pm.set('x', 1);

        assert_eq!(pm.extract_min().unwrap(), ('x', 1));
        assert_eq!(pm.extract_min().unwrap(), ('z', 10));
        assert_eq!(pm.extract_min().unwrap(), ('y', 20));
    }

    #[test]
    fn random_inserts_and_decreases_extract_sorted() {
        for seed in 0..20_u64 {
            let mut rng = StdRng::seed_from_u64(0xF0_0000 + seed);
            let n = rng.random_range(1..150_usize);

            let mut pm = PriorityMap::with_comparator(by_value);
            let mut model = vec![u64::MAX; n];
            for key in 0..n {
                model[key] = rng.random_range(1_000..=1_000_000);
                pm.set(key, model[key]);
            }
            for _ in 0..n {
                let key = rng.random_range(0..n);
                let lowered = model[key].saturating_sub(rng.random_range(0..=900));
                model[key] = lowered;
                pm.set(key, lowered);
            }
            assert_eq!(pm.len(), n, "seed={seed}");

            let mut extracted = Vec::with_capacity(n);
            while let Ok((_, value)) = pm.extract_min() {
                extracted.push(value);
            }
            model.sort_unstable();
            assert_eq!(extracted, model, "seed={seed}");
        }
    }
}
