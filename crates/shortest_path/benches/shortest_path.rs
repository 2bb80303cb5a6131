use std::collections::HashMap;
use std::hint::black_box;

use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use shortest_path::DirectedGraph;
use shortest_path::PathRecord;
use shortest_path::dijkstra_indexed_heap;
use shortest_path::dijkstra_linear_scan;
use shortest_path::generator::GraphCase;
use shortest_path::generator::generate_case;

type Solver = fn(&DirectedGraph, usize) -> HashMap<u32, PathRecord>;

const SOLVERS: [(&str, Solver); 2] = [
    ("indexed_heap", dijkstra_indexed_heap),
    ("linear_scan", dijkstra_linear_scan),
];

const CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::LineWithShortcuts,
    GraphCase::Grid,
    GraphCase::ZeroHeavy,
];

const SIZES: [usize; 3] = [512, 2_048, 8_192];

fn bench_dijkstra(c: &mut Criterion) {
    for case in CASES {
        let mut group = c.benchmark_group(format!("dijkstra/{}", case.label()));

        for &size in &SIZES {
            if size <= 2_048 {
                apply_medium_runtime_config(&mut group);
            } else {
                apply_large_runtime_config(&mut group);
            }

            let seed = 0x5EED_2026 ^ ((size as u64) << 7) ^ (case as u64);
            let input = generate_case(case, size, seed);

            for (name, solver) in SOLVERS {
                group.bench_function(BenchmarkId::new(name, size), |bencher| {
                    bencher.iter(|| {
                        let settled = solver(&input.graph, input.source);
                        black_box(settled);
                    });
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
