//! Fotografia serializável do estado quântico

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::measurement::probabilities;

/// Cópia somente-leitura do vetor de estado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Número de qubits
    pub num_qubits: usize,
    /// Amplitudes complexas (2^n)
    pub amplitudes: Vec<Complex64>,
    /// |a_i|² de cada amplitude
    pub probabilities: Vec<f64>,
    /// Portas aplicadas até aqui
    pub gate_count: u64,
    /// Medições realizadas até aqui
    pub measurement_count: u64,
}

impl StateSnapshot {
    /// Cria snapshot a partir das amplitudes
    pub fn new(num_qubits: usize, amplitudes: &[Complex64]) -> Self {
        Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
            probabilities: probabilities(amplitudes),
            gate_count: 0,
            measurement_count: 0,
        }
    }

    /// Dimensão do espaço (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Estados da base com probabilidade acima de `threshold`
    pub fn nonzero(&self, threshold: f64) -> impl Iterator<Item = (usize, Complex64)> + '_ {
        self.amplitudes
            .iter()
            .copied()
            .enumerate()
            .filter(move |(_, a)| a.norm_sqr() > threshold)
    }
}
