use serde::Serialize;

use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::RiskTier;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub high_risk: usize,
    pub latest: Option<jiff::Timestamp>,
}

pub fn summary(records: &[EvaluationRecord]) -> Summary {
    Summary {
        total: records.len(),
        high_risk: records.iter().filter(|r| r.tier == RiskTier::High).count(),
        latest: records.iter().map(|r| r.timestamp).max(),
    }
}
