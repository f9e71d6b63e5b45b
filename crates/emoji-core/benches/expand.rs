use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_core::expand::{expand, position_codes, Combinations};
use emoji_core::scheme::scheme;

/// An alias of `len` characters, every one of them with three readings.
fn polyphonic_alias(len: usize) -> Vec<Vec<String>> {
    let pool = [
        ["xing", "hang", "heng"],
        ["chang", "zhang", "zhuang"],
        ["le", "yue", "lao"],
        ["zhong", "chong", "tong"],
    ];
    (0..len)
        .map(|i| pool[i % pool.len()].iter().map(|s| s.to_string()).collect())
        .collect()
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    for len in [2usize, 4, 6] {
        let readings = polyphonic_alias(len);
        group.bench_with_input(BenchmarkId::new("quanpin", len), &readings, |b, r| {
            b.iter(|| expand(r, None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mspy", len), &readings, |b, r| {
            b.iter(|| expand(r, scheme("mspy")).unwrap())
        });
    }
    group.finish();
}

fn bench_lazy(c: &mut Criterion) {
    let readings = polyphonic_alias(8);
    let positions = position_codes(&readings, scheme("xiaohe")).unwrap();
    c.bench_function("combinations_first_100", |b| {
        b.iter(|| Combinations::new(positions.clone()).take(100).count())
    });
}

criterion_group!(benches, bench_expand, bench_lazy);
criterion_main!(benches);
