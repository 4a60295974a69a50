use bplus_index::BPlusTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SIZE: i32 = 10_000;

fn random_keys(count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen_range(0..SIZE * 4)).collect()
}

fn build_tree(order: usize) -> BPlusTree<i32, i32> {
    let mut tree = BPlusTree::new(order).unwrap();
    for i in 0..SIZE {
        tree.insert(i * 2, i);
    }
    tree
}

fn insertion_benchmark(c: &mut Criterion) {
    let keys = random_keys(SIZE as usize);
    let mut group = c.benchmark_group("insert");

    for order in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("bplus_tree", order), &order, |b, &order| {
            b.iter(|| {
                let mut tree = BPlusTree::new(order).unwrap();
                for k in &keys {
                    tree.insert(*k, *k);
                }
                black_box(tree.len())
            })
        });
    }

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for k in &keys {
                map.insert(*k, *k);
            }
            black_box(map.len())
        })
    });

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let keys = random_keys(1_000);
    let tree = build_tree(16);
    let map: BTreeMap<i32, i32> = (0..SIZE).map(|i| (i * 2, i)).collect();
    let mut group = c.benchmark_group("lookup");

    group.bench_function("bplus_tree_get", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(tree.get(k));
            }
        })
    });

    group.bench_function("bplus_tree_lower_bound", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(tree.lower_bound(k).key());
            }
        })
    });

    group.bench_function("std_btreemap_get", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(map.get(k));
            }
        })
    });

    group.finish();
}

fn iteration_benchmark(c: &mut Criterion) {
    let tree = build_tree(16);
    let map: BTreeMap<i32, i32> = (0..SIZE).map(|i| (i * 2, i)).collect();
    let mut group = c.benchmark_group("iteration");

    group.bench_function("bplus_tree_forward", |b| {
        b.iter(|| black_box(tree.values().sum::<i32>()))
    });

    group.bench_function("bplus_tree_backward", |b| {
        b.iter(|| black_box(tree.end().values_rev().sum::<i32>()))
    });

    group.bench_function("std_btreemap_forward", |b| {
        b.iter(|| black_box(map.values().sum::<i32>()))
    });

    group.bench_function("bplus_tree_range", |b| {
        b.iter(|| black_box(tree.range(black_box(4_000)..black_box(6_000)).count()))
    });

    group.finish();
}

criterion_group!(benches, insertion_benchmark, lookup_benchmark, iteration_benchmark);
criterion_main!(benches);
