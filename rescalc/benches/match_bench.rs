use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rescalc::prelude::*;

fn bench_get_resistors(c: &mut Criterion) {
    let calc = ResistorCalculator::default();

    c.bench_function("get_resistors_series", |b| {
        b.iter(|| {
            calc.get_resistors(black_box(45.0), black_box(Topology::Series))
        });
    });
}

fn bench_get_ratios(c: &mut Criterion) {
    let calc = ResistorCalculator::default();

    c.bench_function("get_ratios_parallel", |b| {
        b.iter(|| {
            calc.get_ratios(
                black_box(0.75),
                black_box(Topology::Parallel),
                black_box(RatioType::Ratio),
            )
        });
    });
}

criterion_group!(benches, bench_get_resistors, bench_get_ratios);
criterion_main!(benches);
