use std::{collections::BTreeSet, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fixed_bit_set::{BitSet, bit_set};

type Set = bit_set!(1000);

fn every_other(n: usize) -> Set {
    (0..n).step_by(2).collect()
}

fn bench_element_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_operations");

    group.bench_function("insert", |b| {
        let mut set = Set::new();
        let mut i = 0;
        b.iter(|| {
            set.insert(black_box(i % 1000));
            i += 7;
        });
    });

    group.bench_function("contains", |b| {
        let set = every_other(1000);
        let mut i = 0;
        b.iter(|| {
            black_box(set.contains(i % 1000));
            i += 7;
        });
    });

    group.bench_function("toggle", |b| {
        let mut set = Set::new();
        let mut i = 0;
        b.iter(|| {
            black_box(set.toggle(i % 1000));
            i += 13;
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for stride in [1usize, 8, 64, 500] {
        let set: Set = (0..1000).step_by(stride).collect();
        let model: BTreeSet<usize> = set.iter().collect();

        group.bench_with_input(BenchmarkId::new("forward", stride), &set, |b, set| {
            b.iter(|| {
                for x in set {
                    black_box(x);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("reverse", stride), &set, |b, set| {
            b.iter(|| {
                for x in set.iter().rev() {
                    black_box(x);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("cursor", stride), &set, |b, set| {
            b.iter(|| {
                let mut cursor = set.begin();
                while !cursor.is_end() {
                    black_box(cursor.position());
                    cursor.move_next();
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("btreeset", stride), &model, |b, model| {
            b.iter(|| {
                for x in model {
                    black_box(x);
                }
            });
        });
    }

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");
    let set: Set = [3, 500, 999].into();

    group.bench_function("lower_bound", |b| {
        let mut i = 0;
        b.iter(|| {
            black_box(set.lower_bound(i % 1000).position());
            i += 37;
        });
    });

    group.bench_function("rank", |b| {
        let mut i = 0;
        b.iter(|| {
            black_box(set.rank(i % 1000));
            i += 37;
        });
    });

    group.bench_function("len", |b| {
        b.iter(|| black_box(&set).len());
    });

    group.finish();
}

fn bench_algebra<const N: usize, const WORDS: usize>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("algebra/{name}"));
    let a: BitSet<N, WORDS> = (0..N).step_by(3).collect();
    let b: BitSet<N, WORDS> = (0..N).step_by(5).collect();

    group.bench_function("union", |bench| {
        bench.iter(|| black_box(black_box(a) | black_box(b)));
    });
    group.bench_function("intersection", |bench| {
        bench.iter(|| black_box(black_box(a) & black_box(b)));
    });
    group.bench_function("complement", |bench| {
        bench.iter(|| black_box(!black_box(a)));
    });
    group.bench_function("is_subset", |bench| {
        bench.iter(|| black_box(black_box(&a).is_subset(&b)));
    });
    group.bench_function("cmp", |bench| {
        bench.iter(|| black_box(black_box(&a).cmp(&b)));
    });
    group.bench_function("shl", |bench| {
        bench.iter(|| black_box(black_box(a) << 17));
    });
    group.bench_function("shr", |bench| {
        bench.iter(|| black_box(black_box(a) >> 17));
    });

    group.finish();
}

fn bench_algebra_sizes(c: &mut Criterion) {
    bench_algebra::<64, 1>(c, "64");
    bench_algebra::<128, 2>(c, "128");
    bench_algebra::<1000, 16>(c, "1000");
}

criterion_group!(
    benches,
    bench_element_operations,
    bench_iteration,
    bench_lookups,
    bench_algebra_sizes
);
criterion_main!(benches);
