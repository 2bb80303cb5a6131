use std::hint::black_box;

use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::shuffled_keys;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use priority_map::PriorityMap;
use rand::Rng;

const SIZES: [usize; 3] = [1_024, 8_192, 65_536];

fn by_cost(a: &u64, b: &u64) -> std::cmp::Ordering {
    a.cmp(b)
}

fn bench_set_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_map/set_extract");
    apply_small_runtime_config(&mut group);

    for &size in &SIZES {
        let mut rng = default_rng();
        let inserts: Vec<u64> = (0..size)
            .map(|_| rng.random_range(1_000_000..2_000_000_u64))
            .collect();
        let update_keys = shuffled_keys(&mut rng, size);
        let updates: Vec<u64> = (0..size).map(|_| rng.random_range(0..1_000_000)).collect();

        group.bench_function(BenchmarkId::new("insert_update_drain", size), |bencher| {
            bencher.iter(|| {
                let mut pm = PriorityMap::with_comparator(by_cost);
                for (key, &value) in inserts.iter().enumerate() {
                    pm.set(key as u32, value);
                }
                for (&key, &value) in update_keys.iter().zip(&updates) {
                    pm.set(key, value);
                }
                while let Ok(entry) = pm.extract_min() {
                    black_box(entry);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_extract);
criterion_main!(benches);
