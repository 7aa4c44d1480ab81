use irah_core::models::observation::ClinicalObservation;
use irah_core::models::score::{RiskTier, ScoreResult};

use crate::config::{ScoringConfig, TierThresholds};
use crate::error::ScoringError;
use crate::{normalize, NormalizedObservation};

/// Round to two decimal places from the exact binary value.
///
/// Decimal formatting is correctly rounded: `0.075` is stored as
/// `0.07499…` and rounds down, and exact binary ties such as `0.125` go to
/// the even digit. Scaling by 100 first would round both of them up.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Map a rounded index onto a tier.
///
/// Comparison happens in whole hundredths so that `0.30` and `0.60` sit
/// exactly on their inclusive boundaries. Thresholds are whole hundredths;
/// [`ScoringConfig::validate`] rejects anything finer.
pub fn classify(index: f64, tiers: &TierThresholds) -> RiskTier {
    let index = hundredths(index);
    if index <= hundredths(tiers.low_max) {
        RiskTier::Low
    } else if index >= hundredths(tiers.high_min) {
        RiskTier::High
    } else {
        RiskTier::Moderate
    }
}

/// Combine normalized contributions into the composite index and its tier.
///
/// The index is the unweighted mean over the contributions actually summed:
/// the divisor is `terms.len()`, never a separate constant.
pub fn aggregate(normalized: &NormalizedObservation, tiers: &TierThresholds) -> ScoreResult {
    let terms = normalized.terms();
    let mean = terms.iter().sum::<f64>() / terms.len() as f64;
    let index = round2(mean);
    ScoreResult {
        index,
        tier: classify(index, tiers),
    }
}

/// Normalize and score one observation.
pub fn score(
    observation: &ClinicalObservation,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoringError> {
    let normalized = normalize(observation, config)?;
    Ok(aggregate(&normalized, &config.tiers))
}
