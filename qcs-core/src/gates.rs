//! # Quantum Gates — Catálogo de Portas
//!
//! Matrizes unitárias nomeadas usadas como blocos de construção.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: I, X, Y, Z (Pauli), H (Hadamard), S, T (Phase)
//! - **Two-qubit**: CNOT, CZ, SWAP
//! - **Rotation**: Rx, Ry, Rz, P(φ)
//!
//! Nas portas de dois qubits o primeiro alvo é o qubit mais significativo
//! da matriz (o controle, no caso de CNOT e CZ).

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;

use crate::error::{QcsError, QcsResult};
use crate::matrix::{GateMatrix, I, ONE, ZERO};

/// Tolerância usada por [`QuantumGate::is_unitary`]
const UNITARY_TOLERANCE: f64 = 1e-10;

/// Trait para portas quânticas
pub trait QuantumGate {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta (2x2 para single-qubit, 4x4 para two-qubit)
    fn matrix(&self) -> GateMatrix;

    /// Número de qubits sobre os quais a porta atua
    ///
    /// Falha com `NotPowerOfTwo` se a matriz não tiver dimensão 2^k.
    fn num_qubits(&self) -> QcsResult<usize> {
        self.matrix().num_qubits()
    }

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        self.matrix().is_unitary(UNITARY_TOLERANCE)
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta identidade
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl QuantumGate for Identity {
    fn name(&self) -> &'static str {
        "I"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::identity(2)
    }
}

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> GateMatrix {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        GateMatrix::from_array([[h, h], [h, -h]])
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ZERO, ONE], [ONE, ZERO]])
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ZERO, -I], [I, ZERO]])
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ONE, ZERO], [ZERO, -ONE]])
    }
}

/// Porta S (√Z), diag(1, i)
#[derive(Clone, Copy, Debug, Default)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ONE, ZERO], [ZERO, I]])
    }
}

/// Porta T (π/8)
#[derive(Clone, Copy, Debug, Default)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, FRAC_PI_4)]])
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> GateMatrix {
        let c = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(self.theta / 2.0).sin());
        GateMatrix::from_array([[c, s], [s, c]])
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> GateMatrix {
        let c = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let s = Complex64::new((self.theta / 2.0).sin(), 0.0);
        GateMatrix::from_array([[c, -s], [s, c]])
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> GateMatrix {
        let half = self.theta / 2.0;
        GateMatrix::from_array([
            [Complex64::from_polar(1.0, -half), ZERO],
            [ZERO, Complex64::from_polar(1.0, half)],
        ])
    }
}

/// Porta de fase genérica
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "P"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, self.phi)]])
    }
}

/// CNOT: inverte o alvo quando o controle (primeiro qubit) é 1
#[derive(Clone, Copy, Debug, Default)]
pub struct Cnot;

impl QuantumGate for Cnot {
    fn name(&self) -> &'static str {
        "CNOT"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([
            [ONE, ZERO, ZERO, ZERO],
            [ZERO, ONE, ZERO, ZERO],
            [ZERO, ZERO, ZERO, ONE],
            [ZERO, ZERO, ONE, ZERO],
        ])
    }
}

/// CZ: fase -1 em |11⟩
#[derive(Clone, Copy, Debug, Default)]
pub struct Cz;

impl QuantumGate for Cz {
    fn name(&self) -> &'static str {
        "CZ"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([
            [ONE, ZERO, ZERO, ZERO],
            [ZERO, ONE, ZERO, ZERO],
            [ZERO, ZERO, ONE, ZERO],
            [ZERO, ZERO, ZERO, -ONE],
        ])
    }
}

/// SWAP: troca |01⟩ e |10⟩
#[derive(Clone, Copy, Debug, Default)]
pub struct Swap;

impl QuantumGate for Swap {
    fn name(&self) -> &'static str {
        "SWAP"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array([
            [ONE, ZERO, ZERO, ZERO],
            [ZERO, ZERO, ONE, ZERO],
            [ZERO, ONE, ZERO, ZERO],
            [ZERO, ZERO, ZERO, ONE],
        ])
    }
}

// =============================================================================
// Catálogo nomeado
// =============================================================================

/// Portas fixas do catálogo, endereçáveis pelo símbolo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StandardGate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    Cnot,
    Cz,
    Swap,
}

impl StandardGate {
    /// Todas as portas do catálogo
    pub const ALL: [StandardGate; 10] = [
        Self::I,
        Self::X,
        Self::Y,
        Self::Z,
        Self::H,
        Self::S,
        Self::T,
        Self::Cnot,
        Self::Cz,
        Self::Swap,
    ];

    fn gate(&self) -> &'static dyn QuantumGate {
        match self {
            Self::I => &Identity,
            Self::X => &PauliX,
            Self::Y => &PauliY,
            Self::Z => &PauliZ,
            Self::H => &Hadamard,
            Self::S => &SGate,
            Self::T => &TGate,
            Self::Cnot => &Cnot,
            Self::Cz => &Cz,
            Self::Swap => &Swap,
        }
    }
}

impl QuantumGate for StandardGate {
    fn name(&self) -> &'static str {
        self.gate().name()
    }

    fn matrix(&self) -> GateMatrix {
        self.gate().matrix()
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StandardGate {
    type Err = QcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| QcsError::Config(format!("unknown gate '{}'", s)))
    }
}

// =============================================================================
// Testes
// =============================================================================
