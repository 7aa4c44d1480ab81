use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::Serialize;

use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::RiskTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: RiskTier,
    pub label: &'static str,
    pub count: usize,
}

/// Evaluations per tier, always all three tiers in ascending order.
pub fn tier_distribution(records: &[EvaluationRecord]) -> Vec<TierCount> {
    RiskTier::ALL
        .iter()
        .map(|&tier| TierCount {
            tier,
            label: tier.label(),
            count: records.iter().filter(|r| r.tier == tier).count(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: Date,
    pub count: usize,
}

/// Evaluations per civil date in `tz`, oldest first. Days without
/// evaluations are omitted.
pub fn daily_trend(records: &[EvaluationRecord], tz: &TimeZone) -> Vec<DailyCount> {
    let mut by_date: BTreeMap<Date, usize> = BTreeMap::new();
    for record in records {
        let date = record.timestamp.to_zoned(tz.clone()).date();
        *by_date.entry(date).or_default() += 1;
    }
    by_date
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
