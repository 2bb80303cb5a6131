use std::collections::HashMap;

use crate::frontier::Frontier;
use crate::frontier::HeapFrontier;
use crate::frontier::ScanFrontier;
use crate::graph::DirectedGraph;
use crate::graph::Edge;

/// Best known total cost from the source to a vertex, and the edge that
/// achieved it. `last_edge` is `None` only for the source itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PathRecord {
    pub cost: u64,
    pub last_edge: Option<Edge>,
}

/// Dijkstra with the indexed-heap frontier: O((|V| + |E|) log |V|).
pub fn dijkstra_indexed_heap(graph: &DirectedGraph, source: usize) -> HashMap<u32, PathRecord> {
    dijkstra_with::<HeapFrontier>(graph, source)
}

/// Dijkstra with the linear-scan frontier: O(|V|^2 + |E|).
pub fn dijkstra_linear_scan(graph: &DirectedGraph, source: usize) -> HashMap<u32, PathRecord> {
    dijkstra_with::<ScanFrontier>(graph, source)
}

/// Single-source shortest paths over non-negative edge costs.
///
/// Returns a record for every vertex reachable from `source`; vertices
/// with no incoming path are simply absent. An out-of-range source
/// yields an empty map.
///
/// Costs are unsigned by construction; were a caller to smuggle in a
/// wrapped "negative" cost, the greedy settlement argument no longer
/// holds and the result is unspecified.
pub fn dijkstra_with<F: Frontier>(
    graph: &DirectedGraph,
    source: usize,
) -> HashMap<u32, PathRecord> {
    let mut settled: HashMap<u32, PathRecord> = HashMap::new();
    if source >= graph.vertex_count() {
        return settled;
    }

    let mut frontier = F::new();
    frontier.set(
        source as u32,
        PathRecord {
            cost: 0,
            last_edge: None,
        },
    );

    // One extraction settles one vertex, so the loop runs at most |V|
    // times and relaxes each edge at most once.
    while let Some((vertex, record)) = frontier.extract_min() {
        let base = record.cost;
        settled.insert(vertex, record);

        for edge in graph.out_edges(vertex as usize) {
            if settled.contains_key(&edge.to) {
                continue;
            }

            let candidate = base.saturating_add(edge.cost);
            // Strict improvement only: an equal-cost path keeps the
            // first-discovered edge.
            if let Some(existing) = frontier.cost_of(edge.to) {
                if existing <= candidate {
                    continue;
                }
            }

            frontier.set(
                edge.to,
                PathRecord {
                    cost: candidate,
                    last_edge: Some(edge),
                },
            );
        }
    }

    settled
}
