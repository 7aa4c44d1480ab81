use irah_core::models::observation::Scale;

use crate::config::ScoringConfig;
use crate::NumericScale;

/// Charlson comorbidity index, 0–50.
///
/// Scales linearly below saturation: `(value / 6) * 0.75` with the default
/// config, so 5 points contribute 0.625 and 6 or more contribute 1.
pub struct Charlson;

impl NumericScale for Charlson {
    fn scale(&self) -> Scale {
        Scale::Charlson
    }

    fn normalize_in_range(&self, raw: i32, config: &ScoringConfig) -> f64 {
        let rule = &config.charlson;
        if raw <= 0 {
            0.0
        } else if raw >= rule.saturation_min {
            1.0
        } else {
            (f64::from(raw) / f64::from(rule.saturation_min)) * rule.partial_weight
        }
    }
}
