use std::cmp::Ordering;
use std::collections::HashMap;

use priority_map::Compare;
use priority_map::PriorityMap;

use crate::dijkstra::PathRecord;

/// Greedy-selection policy over the not-yet-settled vertices.
///
/// - `set` inserts a new vertex or overwrites a present one; overwrites
///   must lower the cost (the relaxation loop checks first).
/// - `extract_min` returns the cheapest tentative entry, or `None` when
///   the frontier is exhausted.
pub trait Frontier {
    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cost_of(&self, vertex: u32) -> Option<u64>;
    fn set(&mut self, vertex: u32, record: PathRecord);
    fn extract_min(&mut self) -> Option<(u32, PathRecord)>;
}

/// Orders path records by total cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct CostOrder;

impl Compare<PathRecord> for CostOrder {
    fn compare(&self, a: &PathRecord, b: &PathRecord) -> Ordering {
        a.cost.cmp(&b.cost)
    }
}

/// Indexed-heap frontier: O(log n) updates and extraction.
pub struct HeapFrontier {
    records: PriorityMap<u32, PathRecord, CostOrder>,
}

impl Frontier for HeapFrontier {
    fn new() -> Self {
        Self {
            records: PriorityMap::with_comparator(CostOrder),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn cost_of(&self, vertex: u32) -> Option<u64> {
        self.records.get(&vertex).map(|record| record.cost)
    }

    fn set(&mut self, vertex: u32, record: PathRecord) {
        self.records.set(vertex, record);
    }

    fn extract_min(&mut self) -> Option<(u32, PathRecord)> {
        self.records.extract_min().ok()
    }
}

/// Linear-scan frontier: O(n) extraction, kept as a cross-check and as
/// the simpler choice for small or dense graphs.
pub struct ScanFrontier {
    records: HashMap<u32, PathRecord>,
}

impl Frontier for ScanFrontier {
    fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn cost_of(&self, vertex: u32) -> Option<u64> {
        self.records.get(&vertex).map(|record| record.cost)
    }

    fn set(&mut self, vertex: u32, record: PathRecord) {
        self.records.insert(vertex, record);
    }

    fn extract_min(&mut self) -> Option<(u32, PathRecord)> {
        // Ties break toward the smallest vertex id so extraction order is
        // deterministic.
        let (&vertex, _) = self
            .records
            .iter()
            .min_by(|(va, ra), (vb, rb)| ra.cost.cmp(&rb.cost).then(va.cmp(vb)))?;
        let record = self.records.remove(&vertex)?;
        Some((vertex, record))
    }
}
