use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::observation::{AsgCategory, ClinicalObservation, Scale};
use crate::models::score::{RiskTier, ScoreResult};
use crate::schema::field;

/// One persisted evaluation: the raw observation, its score, and when it was saved.
///
/// Field order matches [`crate::schema::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationRecord {
    pub case_id: String,
    pub timestamp: jiff::Timestamp,
    pub fugulin: i32,
    pub asg: AsgCategory,
    pub mrc: i32,
    pub triagem: i32,
    pub charlson: i32,
    pub index: f64,
    pub tier: RiskTier,
}

impl EvaluationRecord {
    /// Build a record for persistence. A blank case identifier is refused.
    pub fn new(
        case_id: &str,
        timestamp: jiff::Timestamp,
        observation: &ClinicalObservation,
        result: &ScoreResult,
    ) -> Result<Self, CoreError> {
        let case_id = case_id.trim();
        if case_id.is_empty() {
            return Err(CoreError::MissingRequiredField(field::CASE_ID.to_string()));
        }

        Ok(Self {
            case_id: case_id.to_string(),
            timestamp,
            fugulin: observation.fugulin,
            asg: observation.asg,
            mrc: observation.mrc,
            triagem: observation.triagem,
            charlson: observation.charlson,
            index: result.index,
            tier: result.tier,
        })
    }

    pub fn observation(&self) -> ClinicalObservation {
        ClinicalObservation {
            fugulin: self.fugulin,
            asg: self.asg,
            mrc: self.mrc,
            triagem: self.triagem,
            charlson: self.charlson,
        }
    }

    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            index: self.index,
            tier: self.tier,
        }
    }

    /// Structural checks applied when a record is read back from a store.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.case_id.trim().is_empty() {
            return Err(CoreError::MissingRequiredField(field::CASE_ID.to_string()));
        }

        let observation = self.observation();
        for scale in Scale::NUMERIC {
            if let (Some(range), Some(value)) = (scale.domain(), observation.raw(scale))
                && !range.contains(value)
            {
                return Err(CoreError::InvalidRecord(format!(
                    "{} value {value} is outside [{}, {}]",
                    scale.id(),
                    range.min,
                    range.max,
                )));
            }
        }

        if !self.index.is_finite() || !(0.0..=1.0).contains(&self.index) {
            return Err(CoreError::InvalidRecord(format!(
                "index {} is outside [0, 1]",
                self.index
            )));
        }
        Ok(())
    }
}
