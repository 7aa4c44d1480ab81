use irah_core::models::observation::AsgCategory;

use crate::config::ScoringConfig;

/// Contribution of an ASG category. Total over the enum, so it cannot fail.
pub fn normalize(category: AsgCategory, config: &ScoringConfig) -> f64 {
    match category {
        AsgCategory::Unspecified | AsgCategory::WellNourished => 0.0,
        AsgCategory::ModeratelyMalnourished => config.asg.moderate,
        AsgCategory::SeverelyMalnourished => config.asg.severe,
    }
}
