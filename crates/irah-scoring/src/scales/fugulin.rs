use irah_core::models::observation::Scale;

use crate::config::ScoringConfig;
use crate::NumericScale;

/// Fugulin nursing-workload classification, 0–100 points.
///
/// Banded: minimal care (up to 17, including the unlisted 17 itself) → 0,
/// intermediate (18–22) → 0.14, high dependency (23–34) → 0.43, above → 1.
pub struct Fugulin;

impl NumericScale for Fugulin {
    fn scale(&self) -> Scale {
        Scale::Fugulin
    }

    fn normalize_in_range(&self, raw: i32, config: &ScoringConfig) -> f64 {
        let bands = &config.fugulin;
        if raw <= bands.minimal_max {
            0.0
        } else if raw <= bands.intermediate_max {
            bands.intermediate_weight
        } else if raw <= bands.high_dependency_max {
            bands.high_dependency_weight
        } else {
            1.0
        }
    }
}
