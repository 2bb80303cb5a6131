mod dijkstra;
mod frontier;
pub mod generator;
pub mod graph;

pub use dijkstra::PathRecord;
pub use dijkstra::dijkstra_indexed_heap;
pub use dijkstra::dijkstra_linear_scan;
pub use dijkstra::dijkstra_with;
pub use frontier::CostOrder;
pub use frontier::Frontier;
pub use frontier::HeapFrontier;
pub use frontier::ScanFrontier;
pub use graph::DirectedGraph;
pub use graph::Edge;
