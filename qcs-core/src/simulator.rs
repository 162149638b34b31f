//! # Quantum Simulator — Container do Vetor de Estado
//!
//! Dono do vetor de amplitudes (2^n), da configuração e do gerador
//! aleatório. Expõe aplicação de portas, medição e inspeção.
//!
//! O gerador é um parâmetro de tipo: testes injetam um `StdRng` com seed
//! (ou qualquer `Rng`) em vez de depender de estado global.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SimulatorConfig;
use crate::engine::{self, check_qubit, state_qubits};
use crate::error::{QcsError, QcsResult};
use crate::gates::QuantumGate;
use crate::matrix::GateMatrix;
use crate::measurement::{self, MeasurementOutcome, QubitOutcome, basis_state};
use crate::state::StateSnapshot;

/// Simulador de vetor de estado denso
#[derive(Debug, Clone)]
pub struct QuantumSimulator<R: Rng = StdRng> {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
    config: SimulatorConfig,
    rng: R,
    gate_count: u64,
    measurement_count: u64,
}

impl QuantumSimulator<StdRng> {
    /// Cria simulador em |0…0⟩ com gerador semeado pelo sistema
    pub fn new(num_qubits: usize) -> QcsResult<Self> {
        Self::from_config(num_qubits, SimulatorConfig::default())
    }

    /// Cria simulador reprodutível a partir de uma seed
    pub fn with_seed(num_qubits: usize, seed: u64) -> QcsResult<Self> {
        Self::with_config(num_qubits, SimulatorConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Cria simulador usando `config.seed` quando presente
    pub fn from_config(num_qubits: usize, config: SimulatorConfig) -> QcsResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_config(num_qubits, config, rng)
    }
}

impl<R: Rng> QuantumSimulator<R> {
    /// Cria simulador com gerador injetado e configuração padrão
    pub fn with_rng(num_qubits: usize, rng: R) -> QcsResult<Self> {
        Self::with_config(num_qubits, SimulatorConfig::default(), rng)
    }

    /// Cria simulador com configuração e gerador explícitos
    pub fn with_config(num_qubits: usize, config: SimulatorConfig, rng: R) -> QcsResult<Self> {
        config.validate()?;
        if num_qubits < 1 {
            return Err(QcsError::InvalidQubitCount(num_qubits));
        }
        if num_qubits > config.max_qubits {
            return Err(QcsError::QubitLimitExceeded {
                requested: num_qubits,
                maximum: config.max_qubits,
            });
        }

        debug!(num_qubits, "simulator initialized");
        Ok(Self {
            amplitudes: basis_state(1 << num_qubits, 0),
            num_qubits,
            config,
            rng,
            gate_count: 0,
            measurement_count: 0,
        })
    }

    /// Cria simulador a partir de amplitudes explícitas
    ///
    /// O tamanho deve ser uma potência de 2. A norma segue
    /// `config.normalization`: `Strict` rejeita vetores fora da tolerância,
    /// `Renormalize` divide as amplitudes por √Σ|a|².
    pub fn from_amplitudes(
        mut amplitudes: Vec<Complex64>,
        config: SimulatorConfig,
        rng: R,
    ) -> QcsResult<Self> {
        let num_qubits = state_qubits(amplitudes.len()).map_err(|_| QcsError::InvalidStateVector {
            length: amplitudes.len(),
            num_qubits: amplitudes.len().checked_ilog2().unwrap_or(0) as usize,
        })?;
        let mut sim = Self::with_config(num_qubits, config, rng)?;

        let probs = measurement::probabilities(&amplitudes);
        let sum: f64 = probs.iter().sum();
        measurement::checked_distribution(probs, sim.config())?;
        if (sum - 1.0).abs() > sim.config().tolerance {
            let norm = sum.sqrt();
            amplitudes.iter_mut().for_each(|a| *a /= norm);
        }

        sim.amplitudes = amplitudes;
        Ok(sim)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Vetor de amplitudes atual
    pub fn state(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn gate_count(&self) -> u64 {
        self.gate_count
    }

    pub fn measurement_count(&self) -> u64 {
        self.measurement_count
    }

    /// |a_i|² de cada estado da base
    pub fn probabilities(&self) -> Vec<f64> {
        measurement::probabilities(&self.amplitudes)
    }

    /// Σ|a_i|²
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Verifica normalização dentro da tolerância configurada
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= self.config.tolerance
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            gate_count: self.gate_count,
            measurement_count: self.measurement_count,
            ..StateSnapshot::new(self.num_qubits, &self.amplitudes)
        }
    }

    /// Volta para |0…0⟩ e zera os contadores
    pub fn reset(&mut self) {
        self.amplitudes = basis_state(1 << self.num_qubits, 0);
        self.gate_count = 0;
        self.measurement_count = 0;
    }

    // -------------------------------------------------------------------
    // Gates
    // -------------------------------------------------------------------

    /// Aplica uma matriz de porta aos alvos
    ///
    /// O estado só é substituído se a aplicação inteira tiver sucesso.
    pub fn apply_gate(&mut self, gate: &GateMatrix, targets: &[usize]) -> QcsResult<()> {
        self.apply_matrix("custom", gate, targets)
    }

    /// Aplica uma porta do catálogo aos alvos
    pub fn apply<G: QuantumGate + ?Sized>(&mut self, gate: &G, targets: &[usize]) -> QcsResult<()> {
        self.apply_matrix(gate.name(), &gate.matrix(), targets)
    }

    fn apply_matrix(&mut self, name: &str, gate: &GateMatrix, targets: &[usize]) -> QcsResult<()> {
        self.check_invariant()?;
        gate.num_qubits()?;
        if targets.is_empty() {
            return Ok(());
        }
        if self.config.check_unitary && !gate.is_unitary(self.config.tolerance) {
            return Err(QcsError::NonUnitaryGate(name.to_string()));
        }

        self.amplitudes = engine::apply_gate(&self.amplitudes, gate, targets)?;
        self.gate_count += 1;
        debug!(gate = name, ?targets, "gate applied");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Measurement
    // -------------------------------------------------------------------

    /// Mede o sistema e devolve a bitstring de n bits
    ///
    /// `target_qubit` é validado, mas a amostragem e o colapso atuam sobre o
    /// registrador inteiro. Para medir só um qubit use [`Self::measure_qubit`].
    pub fn measure(&mut self, target_qubit: usize) -> QcsResult<String> {
        check_qubit(self.num_qubits, target_qubit)?;
        Ok(self.measure_all()?.bitstring)
    }

    /// Mede o sistema inteiro e colapsa para um estado da base
    pub fn measure_all(&mut self) -> QcsResult<MeasurementOutcome> {
        self.check_invariant()?;
        let (outcome, collapsed) =
            measurement::measure(&self.amplitudes, &mut self.rng, &self.config)?;
        self.amplitudes = collapsed;
        self.measurement_count += 1;
        debug!(bitstring = %outcome.bitstring, probability = outcome.probability, "measured");
        Ok(outcome)
    }

    /// Medição projetiva de um único qubit
    pub fn measure_qubit(&mut self, qubit: usize) -> QcsResult<QubitOutcome> {
        self.check_invariant()?;
        let (outcome, collapsed) =
            measurement::measure_qubit(&self.amplitudes, qubit, &mut self.rng, &self.config)?;
        self.amplitudes = collapsed;
        self.measurement_count += 1;
        debug!(qubit, bit = outcome.bit, probability = outcome.probability, "qubit measured");
        Ok(outcome)
    }

    fn check_invariant(&self) -> QcsResult<()> {
        if self.amplitudes.len() != 1 << self.num_qubits {
            return Err(QcsError::InvalidStateVector {
                length: self.amplitudes.len(),
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}
