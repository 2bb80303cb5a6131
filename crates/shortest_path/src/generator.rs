use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::DirectedGraph;

const COST_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    LineWithShortcuts,
    Grid,
    ZeroHeavy,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::LineWithShortcuts => "line_with_shortcuts",
            Self::Grid => "grid",
            Self::ZeroHeavy => "zero_heavy",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph,
    pub source: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random(size.max(16), seed, 4, false),
        GraphCase::DenseRandom => dense_random(size.max(64), seed),
        GraphCase::LineWithShortcuts => line_with_shortcuts(size.max(16), seed),
        GraphCase::Grid => grid(size.max(64), seed),
        GraphCase::ZeroHeavy => sparse_random(size.max(16), seed ^ 0x2E80, 6, true),
    }
}

fn sparse_random(n: usize, seed: u64, edge_factor: usize, zero_heavy: bool) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let m_target = n.saturating_mul(edge_factor).min(n * (n - 1));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let key = ((u as u64) << 32) | v as u64;
        if used.insert(key) {
            let cost = if zero_heavy && rng.random_range(0..4_u8) > 0 {
                0
            } else {
                rng.random_range(0..=COST_MAX)
            };
            edges.push((u as u32, v as u32, cost));
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn dense_random(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(n * (n - 1));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u as u32, v as u32, rng.random_range(0..=COST_MAX)));
            }
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn line_with_shortcuts(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n + n / 4);

    for u in 0..n - 1 {
        edges.push((u as u32, (u + 1) as u32, rng.random_range(1..=100_u64)));
    }
    // A few long jumps so the frontier keeps seeing decrease-key updates.
    for _ in 0..n / 4 {
        let u = rng.random_range(0..n - 1);
        let v = rng.random_range(u + 1..n);
        edges.push((u as u32, v as u32, rng.random_range(0..=COST_MAX)));
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: 0,
    }
}

fn grid(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = floor_sqrt(size).max(4);
    let n = side * side;
    let mut edges = Vec::with_capacity(4 * n);

    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push((v as u32, (v + 1) as u32, rng.random_range(0..=COST_MAX)));
                edges.push(((v + 1) as u32, v as u32, rng.random_range(0..=COST_MAX)));
            }
            if row + 1 < side {
                edges.push((v as u32, (v + side) as u32, rng.random_range(0..=COST_MAX)));
                edges.push(((v + side) as u32, v as u32, rng.random_range(0..=COST_MAX)));
            }
        }
    }

    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn floor_sqrt(value: usize) -> usize {
    let mut x = (value as f64).sqrt() as usize;
    while (x + 1) * (x + 1) <= value {
        x += 1;
    }
    while x * x > value {
        x -= 1;
    }
    x
}
