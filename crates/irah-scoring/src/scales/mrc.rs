use irah_core::models::observation::Scale;

use crate::config::ScoringConfig;
use crate::NumericScale;

/// MRC muscle-strength sum score, 0–60. Lower is weaker.
pub struct Mrc;

impl NumericScale for Mrc {
    fn scale(&self) -> Scale {
        Scale::Mrc
    }

    fn normalize_in_range(&self, raw: i32, config: &ScoringConfig) -> f64 {
        if raw <= config.mrc.weakness_max {
            1.0
        } else {
            0.0
        }
    }
}
