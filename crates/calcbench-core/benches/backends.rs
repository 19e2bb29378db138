//! Criterion benchmarks comparing the two backends.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use calcbench_core::backend::{AcceleratedBackend, Backend, ScriptedBackend};
use calcbench_core::operation::Operation;

fn bench_ackermann(c: &mut Criterion) {
    let backends: Vec<Box<dyn Backend>> = vec![
        Box::new(ScriptedBackend::new()),
        Box::new(AcceleratedBackend::default()),
    ];
    let inputs: Vec<(u64, u64)> = vec![(2, 3), (3, 3), (3, 5)];

    for backend in &backends {
        let mut group = c.benchmark_group(format!("Ackermann/{}", backend.name()));
        for &(m, n) in &inputs {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{m},{n}")),
                &(m, n),
                |b, &(m, n)| {
                    b.iter(|| backend.ackermann(m, n).unwrap());
                },
            );
        }
        group.finish();
    }
}

fn bench_arithmetic(c: &mut Criterion) {
    let backends: Vec<Box<dyn Backend>> = vec![
        Box::new(ScriptedBackend::new()),
        Box::new(AcceleratedBackend::default()),
    ];

    let mut group = c.benchmark_group("Arithmetic");
    for backend in &backends {
        for op in [Operation::Add, Operation::Divide] {
            group.bench_function(format!("{}/{op}", backend.name()), |b| {
                b.iter(|| backend.apply(op, 6.0, 4.0).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_ackermann, bench_arithmetic);
criterion_main!(benches);
