//! Versioned scoring configuration.
//!
//! Every breakpoint and weight used by the normalizer and the scorer lives
//! here. [`ScoringConfig::default`] is the calibrated IRAH table; a clinical
//! recalibration ships as a new JSON document, not a code change.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
pub const CURRENT_VERSION: u32 = 1;

fn current_version() -> u32 {
    CURRENT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub fugulin: FugulinBands,
    #[serde(default)]
    pub asg: AsgWeights,
    #[serde(default)]
    pub mrc: MrcCutoff,
    #[serde(default)]
    pub triagem: TriagemCutoff,
    #[serde(default)]
    pub charlson: CharlsonRule,
    #[serde(default)]
    pub tiers: TierThresholds,
}

/// Fugulin bands. Values up to `minimal_max` (17 included) contribute 0,
/// values above `high_dependency_max` contribute 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FugulinBands {
    pub minimal_max: i32,
    pub intermediate_max: i32,
    pub intermediate_weight: f64,
    pub high_dependency_max: i32,
    pub high_dependency_weight: f64,
}

impl Default for FugulinBands {
    fn default() -> Self {
        Self {
            minimal_max: 17,
            intermediate_max: 22,
            intermediate_weight: 0.14,
            high_dependency_max: 34,
            high_dependency_weight: 0.43,
        }
    }
}

/// ASG weights. Unspecified and well-nourished always contribute 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsgWeights {
    pub moderate: f64,
    pub severe: f64,
}

impl Default for AsgWeights {
    fn default() -> Self {
        Self {
            moderate: 0.5,
            severe: 1.0,
        }
    }
}

/// MRC sum scores at or below `weakness_max` contribute 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MrcCutoff {
    pub weakness_max: i32,
}

impl Default for MrcCutoff {
    fn default() -> Self {
        Self { weakness_max: 35 }
    }
}

/// Triage scores at or above `high_risk_min` contribute 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriagemCutoff {
    pub high_risk_min: i32,
}

impl Default for TriagemCutoff {
    fn default() -> Self {
        Self { high_risk_min: 10 }
    }
}

/// Charlson: 0 contributes 0, `saturation_min` and above contribute 1,
/// anything between contributes `(value / saturation_min) * partial_weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharlsonRule {
    pub saturation_min: i32,
    pub partial_weight: f64,
}

impl Default for CharlsonRule {
    fn default() -> Self {
        Self {
            saturation_min: 6,
            partial_weight: 0.75,
        }
    }
}

/// Tier cut points on the rounded index. `index <= low_max` is Low,
/// `index >= high_min` is High, everything between is Moderate. Both are
/// whole hundredths, the resolution of the index itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierThresholds {
    pub low_max: f64,
    pub high_min: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_max: 0.30,
            high_min: 0.60,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            fugulin: FugulinBands::default(),
            asg: AsgWeights::default(),
            mrc: MrcCutoff::default(),
            triagem: TriagemCutoff::default(),
            charlson: CharlsonRule::default(),
            tiers: TierThresholds::default(),
        }
    }
}

fn is_weight(w: f64) -> bool {
    w.is_finite() && (0.0..=1.0).contains(&w)
}

fn is_hundredths(w: f64) -> bool {
    let scaled = w * 100.0;
    (scaled - scaled.round()).abs() < 1e-9
}

impl ScoringConfig {
    /// Parse and validate a JSON scoring config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that breakpoints are ordered and every weight stays within [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_VERSION,
            });
        }

        let f = &self.fugulin;
        if !(0 <= f.minimal_max
            && f.minimal_max < f.intermediate_max
            && f.intermediate_max < f.high_dependency_max)
        {
            return Err(ConfigError::Invalid(format!(
                "fugulin bands must satisfy 0 <= {} < {} < {}",
                f.minimal_max, f.intermediate_max, f.high_dependency_max
            )));
        }
        if !(is_weight(f.intermediate_weight)
            && is_weight(f.high_dependency_weight)
            && f.intermediate_weight <= f.high_dependency_weight)
        {
            return Err(ConfigError::Invalid(
                "fugulin weights must be within [0, 1] and non-decreasing".to_string(),
            ));
        }

        if !(is_weight(self.asg.moderate)
            && is_weight(self.asg.severe)
            && self.asg.moderate <= self.asg.severe)
        {
            return Err(ConfigError::Invalid(
                "asg weights must be within [0, 1] and non-decreasing".to_string(),
            ));
        }

        if self.charlson.saturation_min < 1 {
            return Err(ConfigError::Invalid(format!(
                "charlson saturation_min must be at least 1, got {}",
                self.charlson.saturation_min
            )));
        }
        if !is_weight(self.charlson.partial_weight) {
            return Err(ConfigError::Invalid(format!(
                "charlson partial_weight must be within [0, 1], got {}",
                self.charlson.partial_weight
            )));
        }

        let t = &self.tiers;
        if !(is_weight(t.low_max) && is_weight(t.high_min) && t.low_max < t.high_min) {
            return Err(ConfigError::Invalid(format!(
                "tier thresholds must satisfy 0 <= low_max ({}) < high_min ({}) <= 1",
                t.low_max, t.high_min
            )));
        }
        if !(is_hundredths(t.low_max) && is_hundredths(t.high_min)) {
            return Err(ConfigError::Invalid(format!(
                "tier thresholds must be whole hundredths, got low_max {} and high_min {}",
                t.low_max, t.high_min
            )));
        }

        Ok(())
    }
}
