//! # ⚛️ qcs-core — Dense State-Vector Simulation
//!
//! Simula a evolução de um registrador de n qubits sob portas unitárias,
//! usando um vetor de estado denso de 2^n amplitudes complexas, e mede o
//! resultado pela regra de Born.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(4^n) por alvo:**
//! - Operador completo montado por produto de Kronecker (n fatores)
//! - Produto matriz-vetor denso 2^n × 2^n
//!
//! **Measurement — O(2^n):**
//! - Probabilidades, busca cumulativa e colapso
//!
//! **Scalability:**
//! - Até 10 qubits (padrão de `max_qubits`): ✓ Excellent
//! - 11–14 qubits: △ operador ocupa até 4 GiB
//!
//! ## Convenção de bits
//!
//! O qubit 0 é o bit mais significativo do índice da base:
//! `|q0 q1 … q(n-1)⟩`. As bitstrings de medição seguem a mesma ordem.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumSimulator                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  State Vector (2^n) + Config + Rng        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Application Engine                  │  │
//! │  │    Gate Catalog → Tensor Expansion        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement (Born rule + collapse)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use qcs_core::{Cnot, Hadamard, QuantumSimulator};
//!
//! let mut sim = QuantumSimulator::with_seed(2, 42)?;
//! sim.apply(&Hadamard, &[0])?;
//! sim.apply(&Cnot, &[0, 1])?;
//!
//! let bits = sim.measure(1)?; // "00" ou "11"
//! let state = sim.state();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod gates;
pub mod matrix;
pub mod measurement;
pub mod simulator;
pub mod state;

pub use config::{NormalizationPolicy, SimulatorConfig};
pub use engine::{apply_gate, operator_for};
pub use error::{QcsError, QcsResult};
pub use gates::{
    Cnot, Cz, Hadamard, Identity, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX,
    RotationY, RotationZ, SGate, StandardGate, Swap, TGate,
};
pub use matrix::{GateMatrix, tensor, tensor_all};
pub use measurement::{MeasurementOutcome, QubitOutcome};
pub use num_complex::Complex64;
pub use simulator::QuantumSimulator;
pub use state::StateSnapshot;

#[cfg(test)]
mod tests;
