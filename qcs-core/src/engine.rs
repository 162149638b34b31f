//! # Gate Application Engine
//!
//! Expande uma porta local (1 ou 2 qubits) para o operador 2^n × 2^n do
//! sistema inteiro e multiplica o vetor de estado por ele.
//!
//! ## Convenção de bits
//!
//! O qubit 0 é o bit MAIS significativo do índice da base: no sistema de
//! n qubits, o qubit `q` corresponde ao bit `n - 1 - q`. A lista de
//! produtos tensoriais começa pelo qubit 0.
//!
//! ## Portas de um qubit
//!
//! Cada alvo é processado de forma independente e sequencial:
//!
//! ```text
//! alvo t  →  [I, …, I, G, I, …, I]  →  I ⊗ … ⊗ G ⊗ … ⊗ I  →  U · ψ
//!                     ↑ posição t
//! ```
//!
//! ## Portas de k qubits (k ≥ 2)
//!
//! Os alvos devem ser exatamente k e distintos; `targets[0]` é o qubit mais
//! significativo da matriz da porta. Um único operador combinado é montado:
//! cadeia tensorial quando os alvos são contíguos e crescentes, ou imersão
//! elemento a elemento quando estão permutados.

use num_complex::Complex64;

use crate::error::{QcsError, QcsResult};
use crate::matrix::{GateMatrix, tensor_all};

/// Número de qubits representado por um vetor de estado de tamanho `len`
pub fn state_qubits(len: usize) -> QcsResult<usize> {
    if len < 2 || !len.is_power_of_two() {
        return Err(QcsError::NotPowerOfTwo(len));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Máscara do bit do qubit `qubit` num sistema de `num_qubits` qubits
#[inline]
pub fn qubit_mask(num_qubits: usize, qubit: usize) -> usize {
    1 << (num_qubits - 1 - qubit)
}

/// Valida um índice de qubit
pub fn check_qubit(num_qubits: usize, qubit: usize) -> QcsResult<()> {
    if qubit >= num_qubits {
        return Err(QcsError::QubitOutOfRange { qubit, num_qubits });
    }
    Ok(())
}

/// Aplica `gate` aos `targets` de `state`, devolvendo o novo estado
///
/// O estado de entrada nunca é alterado; qualquer erro é detectado antes de
/// produzir resultado. Lista de alvos vazia devolve o estado inalterado.
pub fn apply_gate(
    state: &[Complex64],
    gate: &GateMatrix,
    targets: &[usize],
) -> QcsResult<Vec<Complex64>> {
    let num_qubits = state_qubits(state.len())?;
    let gate_qubits = gate.num_qubits()?;

    if targets.is_empty() {
        return Ok(state.to_vec());
    }

    for &t in targets {
        check_qubit(num_qubits, t)?;
    }

    if gate_qubits == 1 {
        let mut current = state.to_vec();
        for &t in targets {
            let operator = operator_for(num_qubits, gate, &[t])?;
            current = operator.mul_vec(&current)?;
        }
        Ok(current)
    } else {
        let operator = operator_for(num_qubits, gate, targets)?;
        operator.mul_vec(state)
    }
}

/// Operador completo 2^n × 2^n de `gate` atuando sobre `targets`
///
/// `targets` deve ter exatamente tantos qubits quantos a porta atua.
pub fn operator_for(
    num_qubits: usize,
    gate: &GateMatrix,
    targets: &[usize],
) -> QcsResult<GateMatrix> {
    let gate_qubits = gate.num_qubits()?;
    if gate_qubits > num_qubits {
        return Err(QcsError::DimensionMismatch {
            expected: 1 << num_qubits,
            got: gate.dim(),
        });
    }
    if targets.len() != gate_qubits {
        return Err(QcsError::TargetCountMismatch {
            expected: gate_qubits,
            got: targets.len(),
        });
    }
    for (i, &t) in targets.iter().enumerate() {
        check_qubit(num_qubits, t)?;
        if targets[..i].contains(&t) {
            return Err(QcsError::DuplicateTarget(t));
        }
    }

    let first = targets[0];
    let contiguous = targets.iter().enumerate().all(|(i, &t)| t == first + i);

    let operator = if contiguous {
        tensor_chain(num_qubits, gate, first, gate_qubits)
    } else {
        embed_permuted(num_qubits, gate, targets)
    };

    if operator.dim() != 1 << num_qubits {
        return Err(QcsError::DimensionMismatch {
            expected: 1 << num_qubits,
            got: operator.dim(),
        });
    }
    Ok(operator)
}

/// `I ⊗ … ⊗ G ⊗ … ⊗ I` com `G` ocupando as posições `first..first + width`
fn tensor_chain(num_qubits: usize, gate: &GateMatrix, first: usize, width: usize) -> GateMatrix {
    let identity = GateMatrix::identity(2);
    let mut factors = Vec::with_capacity(num_qubits - width + 1);
    factors.extend(std::iter::repeat_n(identity.clone(), first));
    factors.push(gate.clone());
    factors.extend(std::iter::repeat_n(identity, num_qubits - first - width));
    tensor_all(&factors)
}

/// Imersão elemento a elemento para alvos em qualquer ordem
///
/// `U[r, c] = G[sub(r), sub(c)]` quando `r` e `c` coincidem em todos os bits
/// fora dos alvos, senão 0.
pub fn embed_permuted(num_qubits: usize, gate: &GateMatrix, targets: &[usize]) -> GateMatrix {
    let dim = 1 << num_qubits;
    let target_mask = targets
        .iter()
        .fold(0usize, |mask, &t| mask | qubit_mask(num_qubits, t));

    let mut operator = GateMatrix::zeros(dim);
    for row in 0..dim {
        for col in 0..dim {
            if row & !target_mask != col & !target_mask {
                continue;
            }
            let value = gate.get(
                gather(row, num_qubits, targets),
                gather(col, num_qubits, targets),
            );
            operator.set(row, col, value);
        }
    }
    operator
}

/// Reúne os bits dos alvos de `index`, `targets[0]` como bit mais significativo
fn gather(index: usize, num_qubits: usize, targets: &[usize]) -> usize {
    targets.iter().fold(0, |acc, &t| {
        (acc << 1) | usize::from(index & qubit_mask(num_qubits, t) != 0)
    })
}
