//! Testes integrados para qcs-core

use crate::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::FRAC_1_SQRT_2;

const TOL: f64 = 1e-9;

fn assert_state(sim: &QuantumSimulator<impl rand::Rng>, expected: &[Complex64]) {
    assert_eq!(sim.state().len(), expected.len());
    for (i, (a, b)) in sim.state().iter().zip(expected).enumerate() {
        assert!((a - b).norm() < TOL, "amplitude {}: {} != {}", i, a, b);
    }
}

fn real(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
}

#[test]
fn test_hadamard_on_qubit_zero() {
    let mut sim = QuantumSimulator::with_seed(2, 1).unwrap();
    sim.apply(&Hadamard, &[0]).unwrap();
    assert_state(&sim, &real(&[FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0]));
}

#[test]
fn test_pauli_x_on_qubit_one() {
    // qubit 1 é o bit menos significativo: |00⟩ → |01⟩ = índice 1
    let mut sim = QuantumSimulator::with_seed(2, 1).unwrap();
    sim.apply(&PauliX, &[1]).unwrap();
    assert_state(&sim, &real(&[0.0, 1.0, 0.0, 0.0]));
}

#[test]
fn test_identity_law() {
    let mut sim = QuantumSimulator::with_seed(3, 5).unwrap();
    sim.apply(&Hadamard, &[0, 2]).unwrap();
    sim.apply(&TGate, &[2]).unwrap();
    let before = sim.state().to_vec();

    for q in 0..3 {
        sim.apply(&Identity, &[q]).unwrap();
    }
    assert_state(&sim, &before);
}

#[test]
fn test_involution_law() {
    let mut sim = QuantumSimulator::with_seed(3, 5).unwrap();
    sim.apply(&Hadamard, &[1]).unwrap();
    sim.apply(&SGate, &[1]).unwrap();
    sim.apply(&RotationY::new(0.4), &[0]).unwrap();
    let before = sim.state().to_vec();

    for q in 0..3 {
        sim.apply(&PauliX, &[q]).unwrap();
        sim.apply(&PauliX, &[q]).unwrap();
        assert_state(&sim, &before);

        sim.apply(&Hadamard, &[q]).unwrap();
        sim.apply(&Hadamard, &[q]).unwrap();
        assert_state(&sim, &before);
    }
}

#[test]
fn test_normalization_invariant() {
    let mut sim = QuantumSimulator::with_seed(4, 77).unwrap();
    let sequence: [(&dyn QuantumGate, &[usize]); 8] = [
        (&Hadamard, &[0, 1, 2, 3]),
        (&PauliY, &[2]),
        (&SGate, &[1, 3]),
        (&Cnot, &[0, 3]),
        (&RotationX::new(1.1), &[2]),
        (&Cz, &[2, 1]),
        (&Swap, &[3, 0]),
        (&Phase::new(-0.3), &[0]),
    ];

    for (gate, targets) in sequence {
        sim.apply(gate, targets).unwrap();
        assert!((sim.norm_sqr() - 1.0).abs() < TOL);
    }
    assert!(sim.is_normalized());
}

#[test]
fn test_bell_state() {
    let mut sim = QuantumSimulator::with_seed(2, 3).unwrap();
    sim.apply(&Hadamard, &[0]).unwrap();
    sim.apply(&Cnot, &[0, 1]).unwrap();
    assert_state(&sim, &real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]));

    let bits = sim.measure(0).unwrap();
    assert!(bits == "00" || bits == "11");
}

#[test]
fn test_reference_sequence() {
    // H(0), CNOT(0, 1), X(1): (|01⟩ + |10⟩)/√2
    let mut sim = QuantumSimulator::with_seed(2, 2026).unwrap();
    sim.apply(&Hadamard, &[0]).unwrap();
    sim.apply(&Cnot, &[0, 1]).unwrap();
    sim.apply(&PauliX, &[1]).unwrap();
    assert_state(&sim, &real(&[0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0]));

    let bits = sim.measure(1).unwrap();
    assert!(bits == "01" || bits == "10");
}

#[test]
fn test_measurement_determinism_after_collapse() {
    let mut sim = QuantumSimulator::with_seed(3, 99).unwrap();
    sim.apply(&Hadamard, &[0, 1, 2]).unwrap();

    let first = sim.measure(0).unwrap();
    let ones: Vec<_> = sim
        .state()
        .iter()
        .filter(|a| (*a - Complex64::new(1.0, 0.0)).norm() < TOL)
        .collect();
    let zeros = sim.state().iter().filter(|a| a.norm() < TOL).count();
    assert_eq!(ones.len(), 1);
    assert_eq!(zeros, 7);

    for target in 0..3 {
        assert_eq!(sim.measure(target).unwrap(), first);
    }
    assert_eq!(sim.measurement_count(), 4);
}

#[test]
fn test_bitstring_matches_collapsed_index() {
    let mut sim = QuantumSimulator::with_seed(3, 12).unwrap();
    sim.apply(&Hadamard, &[0, 1, 2]).unwrap();
    let outcome = sim.measure_all().unwrap();
    assert_eq!(usize::from_str_radix(&outcome.bitstring, 2).unwrap(), outcome.index);
    assert_eq!(sim.state()[outcome.index], Complex64::new(1.0, 0.0));
}

#[test]
fn test_seeded_simulators_agree() {
    let run = |seed| {
        let mut sim = QuantumSimulator::with_config(
            3,
            SimulatorConfig::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap();
        (0..10)
            .map(|_| {
                sim.reset();
                sim.apply(&Hadamard, &[0, 1, 2]).unwrap();
                sim.measure(0).unwrap()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_partial_measurement_on_bell_state() {
    let mut sim = QuantumSimulator::with_seed(2, 8).unwrap();
    sim.apply(&Hadamard, &[0]).unwrap();
    sim.apply(&Cnot, &[0, 1]).unwrap();

    let q0 = sim.measure_qubit(0).unwrap();
    assert!((q0.probability - 0.5).abs() < TOL);
    // correlação perfeita: o qubit 1 agora é certo
    let q1 = sim.measure_qubit(1).unwrap();
    assert_eq!(q0.bit, q1.bit);
    assert!((q1.probability - 1.0).abs() < TOL);
}

#[test]
fn test_custom_two_qubit_gate_matrix() {
    let mut sim = QuantumSimulator::with_seed(3, 1).unwrap();
    sim.apply(&PauliX, &[2]).unwrap();
    // SWAP fornecido como matriz crua entre qubits 2 e 0
    sim.apply_gate(&StandardGate::Swap.matrix(), &[2, 0]).unwrap();
    assert_state(&sim, &real(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]));
}

#[test]
fn test_errors_do_not_mutate() {
    let mut sim = QuantumSimulator::with_seed(2, 1).unwrap();
    sim.apply(&Hadamard, &[1]).unwrap();
    let before = sim.state().to_vec();

    assert_eq!(
        sim.apply(&Cnot, &[0]).unwrap_err(),
        QcsError::TargetCountMismatch { expected: 2, got: 1 }
    );
    assert_eq!(
        sim.apply_gate(&GateMatrix::identity(6), &[0]).unwrap_err(),
        QcsError::NotPowerOfTwo(6)
    );
    assert_eq!(
        sim.apply(&Hadamard, &[3]).unwrap_err(),
        QcsError::QubitOutOfRange { qubit: 3, num_qubits: 2 }
    );
    assert_state(&sim, &before);
}

#[test]
fn test_empty_targets_noop() {
    let mut sim = QuantumSimulator::with_seed(2, 1).unwrap();
    sim.apply(&Hadamard, &[]).unwrap();
    sim.apply(&Cnot, &[]).unwrap();
    assert_state(&sim, &real(&[1.0, 0.0, 0.0, 0.0]));
    assert_eq!(sim.gate_count(), 0);
}

#[test]
fn test_snapshot_serializes() {
    let mut sim = QuantumSimulator::with_seed(1, 1).unwrap();
    sim.apply(&PauliX, &[0]).unwrap();
    let json = serde_json::to_string(&sim.snapshot()).unwrap();
    let back: StateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sim.snapshot());
    assert_eq!(back.nonzero(TOL).map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);
}
