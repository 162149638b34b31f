//! Reference circuit driven by `qcs demo`

use qcs_core::{Cnot, Hadamard, PauliX, QcsResult, QuantumSimulator, StateSnapshot};
use rand::Rng;
use serde::Serialize;

/// Result of one demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Gates applied, in order, as `NAME[targets]`
    pub steps: Vec<String>,
    /// Qubit passed to `measure`
    pub measured_qubit: usize,
    /// Full-register bitstring returned by the measurement
    pub measurement: String,
    /// State after collapse
    pub final_state: StateSnapshot,
}

/// H on 0, CNOT on [0, 1], X on 1, then measure qubit 1.
pub fn run_reference_circuit<R: Rng>(sim: &mut QuantumSimulator<R>) -> QcsResult<DemoReport> {
    let measured_qubit = 1;

    sim.apply(&Hadamard, &[0])?;
    sim.apply(&Cnot, &[0, 1])?;
    sim.apply(&PauliX, &[1])?;
    let measurement = sim.measure(measured_qubit)?;

    Ok(DemoReport {
        steps: vec!["H[0]".into(), "CNOT[0, 1]".into(), "X[1]".into()],
        measured_qubit,
        measurement,
        final_state: sim.snapshot(),
    })
}
