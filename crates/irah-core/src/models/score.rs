use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Ordinal risk tier. `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// All tiers in ascending order.
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    pub fn id(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = CoreError;

    /// Accepts the identifier, the English label, or the Portuguese label
    /// used by existing spreadsheets ("Baixo Risco", "Risco Moderado", "Alto Risco").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "low" | "low risk" | "baixo risco" => Ok(RiskTier::Low),
            "moderate" | "moderate risk" | "risco moderado" => Ok(RiskTier::Moderate),
            "high" | "high risk" | "alto risco" => Ok(RiskTier::High),
            _ => Err(CoreError::UnknownRiskTier(s.to_string())),
        }
    }
}

/// Output of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Composite index in [0, 1], rounded to two decimals.
    pub index: f64,
    pub tier: RiskTier,
}
