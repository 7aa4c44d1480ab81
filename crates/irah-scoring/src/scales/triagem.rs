use irah_core::models::observation::Scale;

use crate::config::ScoringConfig;
use crate::NumericScale;

/// Discharge-risk triage, 0–20.
pub struct Triagem;

impl NumericScale for Triagem {
    fn scale(&self) -> Scale {
        Scale::Triagem
    }

    fn normalize_in_range(&self, raw: i32, config: &ScoringConfig) -> f64 {
        if raw >= config.triagem.high_risk_min {
            1.0
        } else {
            0.0
        }
    }
}
