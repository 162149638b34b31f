//! Tipos de erro para qcs-core

use thiserror::Error;

/// Resultado customizado para operações do simulador
pub type QcsResult<T> = Result<T, QcsError>;

/// Erros que podem ocorrer na simulação
///
/// Todos são erros de entrada do chamador: a operação é abortada antes de
/// qualquer mutação do estado.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QcsError {
    #[error("Invalid qubit count: {0} (must be at least 1)")]
    InvalidQubitCount(usize),

    #[error("Qubit limit exceeded: requested {requested}, maximum {maximum}")]
    QubitLimitExceeded { requested: usize, maximum: usize },

    #[error("Dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Gate acts on {expected} qubits but {got} targets were given")]
    TargetCountMismatch { expected: usize, got: usize },

    #[error("Duplicate target qubit {0}")]
    DuplicateTarget(usize),

    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit system")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Gate {0} is not unitary")]
    NonUnitaryGate(String),

    #[error("Invalid probability distribution: probabilities sum to {0}")]
    InvalidDistribution(f64),

    #[error("Invalid state vector: length {length} for {num_qubits} qubits")]
    InvalidStateVector { length: usize, num_qubits: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
