mod heap;

use std::cmp::Ordering;

pub use heap::{EmptyHeapError, IndexedMinHeap, KeyNotFoundError};

/// Total-order comparator over stored priorities.
///
/// - `compare(a, b) == Less` means `a` is extracted before `b`.
/// - Each heap instance owns its comparator; there is no global default.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator that delegates to `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
