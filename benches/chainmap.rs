#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::{ChainedMap, HashStrategy};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const BUCKET_COUNT: usize = 1024;

fn chained_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>().new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Chained map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut polynomial_map =
        ChainedMap::with_config(BUCKET_COUNT, HashStrategy::Polynomial, 0).unwrap();
    let mut additive_map = ChainedMap::with_config(BUCKET_COUNT, HashStrategy::Additive, 0).unwrap();
    let mut rust_map = HashMap::new();
    group.bench_function("polynomial insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                polynomial_map.insert(key, value);
            }
        });
    });
    group.bench_function("additive insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                additive_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("polynomial get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = polynomial_map.get(key.as_str());
            }
        });
    });
    group.bench_function("additive get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = additive_map.get(key.as_str());
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, chained_map_benches);

criterion_main!(benches);
