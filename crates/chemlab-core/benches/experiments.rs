//! Criterion benchmarks for experiment computation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chemlab_core::{compute, compute_json, example_request, ExperimentKind};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for kind in ExperimentKind::ALL {
        let request = example_request(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &request, |b, req| {
            b.iter(|| compute(req));
        });
    }
    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_json");
    for kind in ExperimentKind::ALL {
        let body = serde_json::to_string(&example_request(kind)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &body, |b, body| {
            b.iter(|| compute_json(body));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_wire);
criterion_main!(benches);
