//! Configuração do simulador (qcs.toml)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QcsError, QcsResult};

/// Limite absoluto de qubits para a representação densa
///
/// O operador completo tem 4^n elementos complexos.
pub const HARD_QUBIT_LIMIT: usize = 14;

/// Política para distribuições de probabilidade que não somam 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    /// Falha com `QcsError::InvalidDistribution`
    #[default]
    Strict,
    /// Divide as probabilidades pela soma antes de amostrar
    Renormalize,
}

/// Configuração do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Tolerância numérica para normalização e unitariedade
    pub tolerance: f64,
    /// Tratamento de distribuições não normalizadas na medição
    pub normalization: NormalizationPolicy,
    /// Número máximo de qubits aceito pelo construtor
    pub max_qubits: usize,
    /// Rejeitar portas não unitárias antes de aplicá-las
    pub check_unitary: bool,
    /// Seed do gerador aleatório (None = entropia do sistema)
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            normalization: NormalizationPolicy::Strict,
            max_qubits: 10,
            check_unitary: false,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Lê configuração de uma string TOML
    pub fn from_toml_str(content: &str) -> QcsResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| QcsError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Lê configuração de um arquivo TOML
    pub fn from_file(path: &Path) -> QcsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QcsError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serializa para TOML
    pub fn to_toml_string(&self) -> QcsResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| QcsError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Valida os campos
    pub fn validate(&self) -> QcsResult<()> {
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(QcsError::Config(format!(
                "tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        if self.max_qubits == 0 || self.max_qubits > HARD_QUBIT_LIMIT {
            return Err(QcsError::Config(format!(
                "max_qubits must be in 1..={}, got {}",
                HARD_QUBIT_LIMIT, self.max_qubits
            )));
        }
        Ok(())
    }
}
