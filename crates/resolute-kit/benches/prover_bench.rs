//! Benchmarks for the resolution search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resolute_base::XorShift64;
use resolute_core::{resolve, run, PolicyKind, SearchConfig};
use resolute_kit::{sample, Clause, Literal, PremiseSet};

fn pigeonhole_2_in_1() -> PremiseSet {
    // two pigeons, one hole
    [
        Clause::from(Literal::positive("a")),
        Clause::from(Literal::positive("b")),
        Clause::new([Literal::negative("a"), Literal::negative("b")]),
    ]
    .into_iter()
    .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let left = Clause::new((0..8).map(|i| Literal::new(i % 2 == 0, format!("x{i}"))));
    let right = Clause::new((0..8).map(|i| Literal::new(i % 2 == 1, format!("x{i}"))));
    c.bench_function("resolve_8x8", |b| {
        b.iter(|| resolve(black_box(&left), black_box(&right)).count());
    });
}

fn bench_policies(c: &mut Criterion) {
    let mut rng = XorShift64::new(17);
    let problems: Vec<PremiseSet> = (0..8).filter_map(|_| sample(2, &mut rng).ok()).collect();
    let config = SearchConfig::default();

    let mut group = c.benchmark_group("search_2_atoms");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &problems, |b, problems| {
            b.iter(|| {
                for premises in problems {
                    let mut policy = kind.build(1);
                    let _ = black_box(run(premises, policy.as_mut(), &config));
                }
            });
        });
    }
    group.finish();
}

fn bench_small_refutation(c: &mut Criterion) {
    let premises = pigeonhole_2_in_1();
    c.bench_function("refute_pigeonhole_2_1", |b| {
        b.iter(|| {
            let mut policy = PolicyKind::First.build(0);
            run(black_box(&premises), policy.as_mut(), &SearchConfig::default())
        });
    });
}

criterion_group!(benches, bench_resolve, bench_policies, bench_small_refutation);
criterion_main!(benches);
