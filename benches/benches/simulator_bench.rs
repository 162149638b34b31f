//! # Simulator Benchmarks
//!
//! Measures gate application and measurement on the state container.
//!
//! Run: `cargo bench --bench simulator_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qcs_core::{Cnot, Hadamard, PauliX, QuantumSimulator};

/// Benchmark Hadamard on every qubit
fn bench_apply_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_hadamard_all");

    for n in [2usize, 4, 6, 8] {
        let targets: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &targets, |b, t| {
            let mut sim = QuantumSimulator::with_seed(n, 1).unwrap();
            b.iter(|| {
                sim.apply(&Hadamard, black_box(t)).unwrap();
            })
        });
    }

    group.finish();
}

/// Benchmark CNOT ladder
fn bench_apply_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_cnot_ladder");

    for n in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut sim = QuantumSimulator::with_seed(n, 1).unwrap();
            sim.apply(&Hadamard, &[0]).unwrap();
            b.iter(|| {
                for q in 0..n - 1 {
                    sim.apply(&Cnot, &[q, q + 1]).unwrap();
                }
            })
        });
    }

    group.finish();
}

/// Benchmark full-register measurement
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for n in [2usize, 6, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut sim = QuantumSimulator::with_seed(n, 7).unwrap();
            b.iter(|| {
                sim.reset();
                sim.apply(&PauliX, &[0]).unwrap();
                black_box(sim.measure(0).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_single_qubit, bench_apply_cnot, bench_measure);
criterion_main!(benches);
