//! # Tensor Expansion Benchmarks
//!
//! Measures Kronecker product and full-operator construction.
//! Operator size grows as 4^n.
//!
//! Run: `cargo bench --bench tensor_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qcs_core::{operator_for, tensor, tensor_all, Cnot, GateMatrix, Hadamard, QuantumGate};

/// Benchmark a single Kronecker product
fn bench_tensor_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_pair");
    let h = Hadamard.matrix();

    for dim in [2usize, 4, 8, 16] {
        let identity = GateMatrix::identity(dim);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &identity, |b, m| {
            b.iter(|| black_box(tensor(black_box(m), black_box(&h))))
        });
    }

    group.finish();
}

/// Benchmark reducing an n-factor list
fn bench_tensor_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_chain");

    for n in [2usize, 4, 6, 8] {
        let mut factors = vec![GateMatrix::identity(2); n];
        factors[0] = Hadamard.matrix();
        group.bench_with_input(BenchmarkId::from_parameter(n), &factors, |b, f| {
            b.iter(|| black_box(tensor_all(black_box(f))))
        });
    }

    group.finish();
}

/// Benchmark contiguous vs permuted two-qubit embedding
fn bench_two_qubit_operator(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_operator");
    let cnot = Cnot.matrix();

    for n in [3usize, 5, 7] {
        group.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| black_box(operator_for(n, &cnot, &[0, 1])))
        });
        group.bench_with_input(BenchmarkId::new("permuted", n), &n, |b, &n| {
            b.iter(|| black_box(operator_for(n, &cnot, &[n - 1, 0])))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tensor_pair,
    bench_tensor_chain,
    bench_two_qubit_operator,
);
criterion_main!(benches);
