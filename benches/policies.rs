use boundcache::builder::{CacheBuilder, PolicyKind};
use boundcache::cache::{FifoCache, LifoCache, LruCache, MruCache};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 1024;

fn skewed_keys(len: usize, universe: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            // 80% of requests go to the lowest 20% of keys
            if rng.random_bool(0.8) {
                rng.random_range(0..universe / 5)
            } else {
                rng.random_range(0..universe)
            }
        })
        .collect()
}

fn bench_insert_get(c: &mut Criterion) {
    c.bench_function("fifo_insert_get", |b| {
        b.iter(|| {
            let mut cache = FifoCache::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                cache.put(i, i);
            }
            for i in 0..CAPACITY as u64 {
                let _ = std::hint::black_box(cache.get(&i));
            }
        })
    });

    c.bench_function("lru_insert_get", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..CAPACITY as u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction_churn");
    group.bench_function("lifo", |b| {
        b.iter_batched(
            || {
                let mut cache = LifoCache::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("mru", |b| {
        b.iter_batched(
            || {
                let mut cache = MruCache::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_skewed_workload(c: &mut Criterion) {
    let keys = skewed_keys(16_384, 8 * CAPACITY as u64);
    let mut group = c.benchmark_group("skewed_workload");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &keys, |b, keys| {
            b.iter_batched(
                || CacheBuilder::new(CAPACITY).policy(kind).build::<u64, u64>(),
                |mut cache| {
                    for &key in keys {
                        if cache.get(&key).is_none() {
                            cache.put(key, key);
                        }
                    }
                    std::hint::black_box(cache.size())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_get,
    bench_eviction_churn,
    bench_skewed_workload
);
criterion_main!(benches);
