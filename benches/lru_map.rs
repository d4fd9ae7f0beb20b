use commonskit::map::{LinkedMap, LruMap, SoftLruMap};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_lru_insert_get(c: &mut Criterion) {
    c.bench_function("lru_map_insert_get", |b| {
        b.iter_batched(
            || {
                let mut map = LruMap::new(1024);
                for i in 0..1024u64 {
                    map.insert(i, i);
                }
                map
            },
            |mut map| {
                for i in 0..1024u64 {
                    map.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(map.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_map_eviction_churn", |b| {
        b.iter_batched(
            || {
                let mut map = LruMap::new(1024);
                for i in 0..1024u64 {
                    map.insert(i, i);
                }
                map
            },
            |mut map| {
                for i in 0..4096u64 {
                    map.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_random_workload(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<u64> = (0..8192).map(|_| rng.gen_range(0..2048)).collect();

    c.bench_function("lru_map_random_workload", |b| {
        b.iter_batched(
            || LruMap::new(512),
            |mut map| {
                for &key in &keys {
                    if map.get(&key).is_none() {
                        map.insert(key, key);
                    }
                }
                std::hint::black_box(map.stats().hit_ratio())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_soft_reclaim(c: &mut Criterion) {
    c.bench_function("soft_lru_map_reclaim", |b| {
        b.iter_batched(
            || {
                let mut map = SoftLruMap::new(4096);
                for i in 0..4096u64 {
                    map.insert(i, i);
                }
                let held: Vec<_> = (0..4096u64).step_by(8).filter_map(|i| map.get(&i)).collect();
                (map, held)
            },
            |(mut map, held)| {
                std::hint::black_box(map.reclaim());
                held
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_linked_map_access_order(c: &mut Criterion) {
    c.bench_function("linked_map_access_order_get", |b| {
        b.iter_batched(
            || {
                let mut map = LinkedMap::with_access_order(true);
                for i in 0..4096u64 {
                    map.insert(i, i);
                }
                map
            },
            |mut map| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(map.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_insert_get,
    bench_lru_eviction_churn,
    bench_lru_random_workload,
    bench_soft_reclaim,
    bench_linked_map_access_order
);
criterion_main!(benches);
