//! irah-scoring
//!
//! The IRAH normalizer and scorer: pure functions over `irah-core` types
//! with no I/O and no shared state. Breakpoints come from a
//! [`config::ScoringConfig`] passed in by the caller.

pub mod config;
pub mod error;
pub mod scales;
pub mod scorer;

use irah_core::models::observation::{ClinicalObservation, Scale};

use config::ScoringConfig;
use error::ScoringError;

/// Trait implemented by each integer-valued clinical sub-scale.
pub trait NumericScale: Send + Sync {
    /// Which sub-scale this is.
    fn scale(&self) -> Scale;

    /// Map a raw value already known to be inside the scale's domain.
    fn normalize_in_range(&self, raw: i32, config: &ScoringConfig) -> f64;

    /// Validate a raw value against the scale's domain, then normalize it.
    /// Out-of-domain values are reported, never clamped.
    fn normalize(&self, raw: i32, config: &ScoringConfig) -> Result<f64, ScoringError> {
        let scale = self.scale();
        if let Some(range) = scale.domain()
            && !range.contains(raw)
        {
            return Err(ScoringError::OutOfRangeInput {
                scale,
                value: raw,
                min: range.min,
                max: range.max,
            });
        }
        Ok(self.normalize_in_range(raw, config))
    }
}

/// Per-scale contributions of one observation, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedObservation {
    pub fugulin: f64,
    pub asg: f64,
    pub mrc: f64,
    pub triagem: f64,
    pub charlson: f64,
}

impl NormalizedObservation {
    /// Contributions in record column order.
    pub fn terms(&self) -> [f64; 5] {
        [self.fugulin, self.asg, self.mrc, self.triagem, self.charlson]
    }
}

/// Normalize every field of an observation.
///
/// Fields are checked in column order; the first out-of-domain field is reported.
pub fn normalize(
    observation: &ClinicalObservation,
    config: &ScoringConfig,
) -> Result<NormalizedObservation, ScoringError> {
    Ok(NormalizedObservation {
        fugulin: scales::fugulin::Fugulin.normalize(observation.fugulin, config)?,
        asg: scales::asg::normalize(observation.asg, config),
        mrc: scales::mrc::Mrc.normalize(observation.mrc, config)?,
        triagem: scales::triagem::Triagem.normalize(observation.triagem, config)?,
        charlson: scales::charlson::Charlson.normalize(observation.charlson, config)?,
    })
}
