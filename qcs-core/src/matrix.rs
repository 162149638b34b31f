//! # Matrizes Complexas — GateMatrix e Expansão Tensorial
//!
//! Matriz quadrada densa de amplitudes complexas (row-major) e o produto de
//! Kronecker usado para montar o operador de n qubits a partir dos
//! operadores locais.
//!
//! ```text
//!           ┌ a00·B  a01·B ┐
//! A ⊗ B  =  │              │      (A ⊗ B)[i, j] = A[i/q, j/q] · B[i%q, j%q]
//!           └ a10·B  a11·B ┘
//! ```

use num_complex::Complex64;
use std::fmt;

use crate::error::{QcsError, QcsResult};

/// Zero complexo
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Um complexo
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Unidade imaginária
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Matriz quadrada complexa
#[derive(Clone, Debug, PartialEq)]
pub struct GateMatrix {
    dim: usize,
    /// Elementos em ordem row-major (`dim * dim`)
    elements: Vec<Complex64>,
}

impl GateMatrix {
    /// Matriz identidade de dimensão `dim`
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.elements[i * dim + i] = ONE;
        }
        m
    }

    /// Matriz nula de dimensão `dim`
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            elements: vec![ZERO; dim * dim],
        }
    }

    /// Cria matriz a partir de um array fixo de linhas
    pub fn from_array<const N: usize>(rows: [[Complex64; N]; N]) -> Self {
        Self {
            dim: N,
            elements: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        }
    }

    /// Cria matriz a partir de linhas de tamanho arbitrário
    ///
    /// Falha se a matriz estiver vazia ou não for quadrada.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> QcsResult<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(QcsError::DimensionMismatch { expected: 1, got: 0 });
        }
        let mut elements = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(QcsError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            elements.extend(row);
        }
        Ok(Self { dim, elements })
    }

    /// Dimensão (número de linhas = colunas)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Elemento (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row * self.dim + col]
    }

    /// Define o elemento (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.elements[row * self.dim + col] = value;
    }

    /// Número de qubits sobre os quais a matriz atua (log2 da dimensão)
    ///
    /// Falha se a dimensão não for uma potência de 2 maior que 1.
    pub fn num_qubits(&self) -> QcsResult<usize> {
        qubits_for_dimension(self.dim)
    }

    /// Produto matricial `self · other`
    pub fn mul(&self, other: &GateMatrix) -> QcsResult<GateMatrix> {
        if self.dim != other.dim {
            return Err(QcsError::DimensionMismatch {
                expected: self.dim,
                got: other.dim,
            });
        }
        let n = self.dim;
        let mut out = GateMatrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                if a == ZERO {
                    continue;
                }
                for j in 0..n {
                    out.elements[i * n + j] += a * other.get(k, j);
                }
            }
        }
        Ok(out)
    }

    /// Produto matriz-vetor `self · v`
    pub fn mul_vec(&self, v: &[Complex64]) -> QcsResult<Vec<Complex64>> {
        if v.len() != self.dim {
            return Err(QcsError::DimensionMismatch {
                expected: self.dim,
                got: v.len(),
            });
        }
        Ok(self
            .elements
            .chunks_exact(self.dim)
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> GateMatrix {
        let n = self.dim;
        let mut out = GateMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                out.elements[j * n + i] = self.get(i, j).conj();
            }
        }
        out
    }

    /// Compara elemento a elemento com tolerância
    pub fn approx_eq(&self, other: &GateMatrix, tolerance: f64) -> bool {
        self.dim == other.dim
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Verifica se U·U† = I dentro da tolerância
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        match self.mul(&self.dagger()) {
            Ok(product) => product.approx_eq(&GateMatrix::identity(self.dim), tolerance),
            Err(_) => false,
        }
    }
}

impl fmt::Display for GateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elements.chunks_exact(self.dim) {
            let cells: Vec<String> = row
                .iter()
                .map(|c| format!("{:>7.4}{:+.4}i", c.re, c.im))
                .collect();
            writeln!(f, "[{}]", cells.join("  "))?;
        }
        Ok(())
    }
}

/// log2 de uma dimensão de gate (≥ 2, potência de 2)
pub fn qubits_for_dimension(dim: usize) -> QcsResult<usize> {
    if dim < 2 || !dim.is_power_of_two() {
        return Err(QcsError::NotPowerOfTwo(dim));
    }
    Ok(dim.trailing_zeros() as usize)
}

/// Produto de Kronecker `a ⊗ b`
///
/// Para `a` p×p e `b` q×q produz a matriz (p·q)×(p·q) com
/// `out[i, j] = a[i/q, j/q] · b[i%q, j%q]`.
pub fn tensor(a: &GateMatrix, b: &GateMatrix) -> GateMatrix {
    let q = b.dim;
    let dim = a.dim * q;
    let mut elements = Vec::with_capacity(dim * dim);
    for i in 0..dim {
        for j in 0..dim {
            elements.push(a.get(i / q, j / q) * b.get(i % q, j % q));
        }
    }
    GateMatrix { dim, elements }
}

/// Reduz uma lista de matrizes por produto tensorial, na ordem da lista
///
/// `[m0, m1, m2]` → `(m0 ⊗ m1) ⊗ m2`. Lista vazia produz a identidade 1×1.
pub fn tensor_all(matrices: &[GateMatrix]) -> GateMatrix {
    matrices
        .iter()
        .fold(GateMatrix::identity(1), |acc, m| tensor(&acc, m))
}
