//! # Measurement — Regra de Born e Colapso
//!
//! ## Computational Complexity
//!
//! **Global measurement — O(2^n):**
//! - Probabilidades |a_i|², uma busca cumulativa e o vetor colapsado
//!
//! **Single-qubit measurement — O(2^n):**
//! - Probabilidade do ramo, projeção e renormalização
//!
//! O gerador aleatório é sempre recebido pelo chamador.

use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{NormalizationPolicy, SimulatorConfig};
use crate::engine::{check_qubit, qubit_mask, state_qubits};
use crate::error::{QcsError, QcsResult};
use crate::matrix::{ONE, ZERO};

/// Resultado de uma medição do sistema inteiro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementOutcome {
    /// Índice da base amostrado
    pub index: usize,
    /// Índice em binário big-endian com n bits (qubit 0 primeiro)
    pub bitstring: String,
    /// Probabilidade do resultado antes do colapso
    pub probability: f64,
}

/// Resultado de uma medição projetiva de um único qubit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitOutcome {
    pub qubit: usize,
    /// 0 ou 1
    pub bit: u8,
    pub probability: f64,
}

/// Probabilidades |a_i|² de cada estado da base
pub fn probabilities(state: &[Complex64]) -> Vec<f64> {
    state.iter().map(|a| a.norm_sqr()).collect()
}

/// Índice em binário com `num_qubits` bits, qubit 0 à esquerda
pub fn format_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Verifica que a distribuição soma 1, aplicando a política configurada
pub fn checked_distribution(mut probs: Vec<f64>, config: &SimulatorConfig) -> QcsResult<Vec<f64>> {
    let sum: f64 = probs.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(QcsError::InvalidDistribution(sum));
    }
    if (sum - 1.0).abs() > config.tolerance {
        match config.normalization {
            NormalizationPolicy::Strict => return Err(QcsError::InvalidDistribution(sum)),
            NormalizationPolicy::Renormalize => {
                warn!(sum, "renormalizing measurement distribution");
                probs.iter_mut().for_each(|p| *p /= sum);
            }
        }
    }
    Ok(probs)
}

/// Amostra um índice de `probs` por busca cumulativa
///
/// `probs` deve ter soma positiva. Erros de arredondamento no fim da busca
/// caem no último índice com probabilidade não nula.
pub fn sample_index<R: Rng + ?Sized>(probs: &[f64], rng: &mut R) -> usize {
    let total: f64 = probs.iter().sum();
    let draw = rng.gen_range(0.0..1.0) * total;

    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if p > 0.0 && draw < cumulative {
            return i;
        }
    }
    probs.iter().rposition(|&p| p > 0.0).unwrap_or(0)
}

/// Vetor da base `index` de dimensão `dim`
pub fn basis_state(dim: usize, index: usize) -> Vec<Complex64> {
    let mut state = vec![ZERO; dim];
    state[index] = ONE;
    state
}

/// Mede o sistema inteiro: amostra um índice e colapsa para a base
pub fn measure<R: Rng + ?Sized>(
    state: &[Complex64],
    rng: &mut R,
    config: &SimulatorConfig,
) -> QcsResult<(MeasurementOutcome, Vec<Complex64>)> {
    let num_qubits = state_qubits(state.len())?;
    let probs = checked_distribution(probabilities(state), config)?;

    let index = sample_index(&probs, rng);
    let outcome = MeasurementOutcome {
        index,
        bitstring: format_bitstring(index, num_qubits),
        probability: probs[index],
    };
    Ok((outcome, basis_state(state.len(), index)))
}

/// Medição projetiva de um único qubit
///
/// Zera o ramo rejeitado e renormaliza o restante; os demais qubits
/// permanecem em superposição.
pub fn measure_qubit<R: Rng + ?Sized>(
    state: &[Complex64],
    qubit: usize,
    rng: &mut R,
    config: &SimulatorConfig,
) -> QcsResult<(QubitOutcome, Vec<Complex64>)> {
    let num_qubits = state_qubits(state.len())?;
    check_qubit(num_qubits, qubit)?;
    let probs = checked_distribution(probabilities(state), config)?;

    let mask = qubit_mask(num_qubits, qubit);
    let p_one: f64 = probs
        .iter()
        .enumerate()
        .filter(|(i, _)| i & mask != 0)
        .map(|(_, p)| p)
        .sum();
    let p_zero = 1.0 - p_one;

    let mut bit = u8::from(rng.gen_range(0.0..1.0) >= p_zero);
    if bit == 1 && p_one <= 0.0 {
        bit = 0;
    } else if bit == 0 && p_zero <= 0.0 {
        bit = 1;
    }
    let keep_one = bit == 1;

    let branch_norm: f64 = state
        .iter()
        .enumerate()
        .filter(|(i, _)| (i & mask != 0) == keep_one)
        .map(|(_, a)| a.norm_sqr())
        .sum::<f64>()
        .sqrt();
    if branch_norm <= 0.0 {
        return Err(QcsError::InvalidDistribution(0.0));
    }

    let collapsed: Vec<Complex64> = state
        .iter()
        .enumerate()
        .map(|(i, a)| {
            if (i & mask != 0) == keep_one {
                *a / branch_norm
            } else {
                ZERO
            }
        })
        .collect();

    let outcome = QubitOutcome {
        qubit,
        bit,
        probability: if keep_one { p_one } else { p_zero },
    };
    Ok((outcome, collapsed))
}
