use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::RiskTier;

fn newest_first(mut records: Vec<EvaluationRecord>) -> Vec<EvaluationRecord> {
    // Stable sort: same-timestamp records keep insertion order.
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}

/// High-risk evaluations, newest first.
pub fn latest_high_risk(records: &[EvaluationRecord]) -> Vec<EvaluationRecord> {
    newest_first(
        records
            .iter()
            .filter(|r| r.tier == RiskTier::High)
            .cloned()
            .collect(),
    )
}

/// Evaluations whose tier is in `tiers`, newest first.
/// An empty selection means no filter.
pub fn filter_by_tiers(records: &[EvaluationRecord], tiers: &[RiskTier]) -> Vec<EvaluationRecord> {
    newest_first(
        records
            .iter()
            .filter(|r| tiers.is_empty() || tiers.contains(&r.tier))
            .cloned()
            .collect(),
    )
}
