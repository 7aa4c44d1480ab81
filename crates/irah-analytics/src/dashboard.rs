use jiff::tz::TimeZone;
use serde::Serialize;

use irah_core::models::record::EvaluationRecord;

use crate::distribution::{daily_trend, tier_distribution, DailyCount, TierCount};
use crate::stats::{
    correlation_matrix, high_risk_comparison, scale_means, CorrelationMatrix, MetricMean,
    ScaleComparison,
};
use crate::summary::{summary, Summary};
use crate::table::latest_high_risk;

/// Every dashboard view computed from one history snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub distribution: Vec<TierCount>,
    pub daily: Vec<DailyCount>,
    pub means: Vec<MetricMean>,
    pub correlation: CorrelationMatrix,
    pub comparison: Vec<ScaleComparison>,
    pub high_risk: Vec<EvaluationRecord>,
}

impl Dashboard {
    pub fn build(records: &[EvaluationRecord], tz: &TimeZone) -> Self {
        Self {
            summary: summary(records),
            distribution: tier_distribution(records),
            daily: daily_trend(records, tz),
            means: scale_means(records),
            correlation: correlation_matrix(records),
            comparison: high_risk_comparison(records),
            high_risk: latest_high_risk(records),
        }
    }
}
