use jiff::tz::{self, TimeZone};
use pretty_assertions::assert_eq;

use irah_analytics::dashboard::Dashboard;
use irah_analytics::distribution::{daily_trend, tier_distribution};
use irah_analytics::stats::{
    correlation_matrix, high_risk_comparison, pearson, scale_means, Metric,
};
use irah_analytics::summary::summary;
use irah_analytics::table::{filter_by_tiers, latest_high_risk};
use irah_core::models::observation::{AsgCategory, ClinicalObservation};
use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::{RiskTier, ScoreResult};

#[allow(clippy::too_many_arguments)]
fn record(
    case_id: &str,
    at: &str,
    fugulin: i32,
    asg: AsgCategory,
    mrc: i32,
    triagem: i32,
    charlson: i32,
    index: f64,
    tier: RiskTier,
) -> EvaluationRecord {
    let observation = ClinicalObservation {
        fugulin,
        asg,
        mrc,
        triagem,
        charlson,
    };
    EvaluationRecord::new(
        case_id,
        at.parse().unwrap(),
        &observation,
        &ScoreResult { index, tier },
    )
    .unwrap()
}

#[rustfmt::skip]
fn history() -> Vec<EvaluationRecord> {
    vec![
        record("A", "2025-05-01T10:00:00Z", 10, AsgCategory::Unspecified, 50, 2, 0, 0.0, RiskTier::Low),
        record("B", "2025-05-01T15:00:00Z", 30, AsgCategory::ModeratelyMalnourished, 30, 12, 3, 0.66, RiskTier::High),
        record("C", "2025-05-02T09:00:00Z", 20, AsgCategory::WellNourished, 40, 11, 6, 0.43, RiskTier::Moderate),
        record("D", "2025-05-03T23:30:00Z", 40, AsgCategory::SeverelyMalnourished, 10, 15, 10, 1.0, RiskTier::High),
    ]
}

fn ids(records: &[EvaluationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.case_id.as_str()).collect()
}

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn summary_counts_high_risk_and_latest() {
    let s = summary(&history());
    assert_eq!(s.total, 4);
    assert_eq!(s.high_risk, 2);
    assert_eq!(s.latest, Some("2025-05-03T23:30:00Z".parse().unwrap()));
}

#[test]
fn empty_history_has_no_latest() {
    let s = summary(&[]);
    assert_eq!(s.total, 0);
    assert_eq!(s.latest, None);
}

#[test]
fn distribution_lists_every_tier_in_order() {
    let counts: Vec<_> = tier_distribution(&history())
        .into_iter()
        .map(|c| (c.tier, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![(RiskTier::Low, 1), (RiskTier::Moderate, 1), (RiskTier::High, 2)]
    );

    let empty: Vec<_> = tier_distribution(&[]).into_iter().map(|c| c.count).collect();
    assert_eq!(empty, vec![0, 0, 0]);
}

#[test]
fn daily_trend_groups_by_civil_date() {
    let trend: Vec<_> = daily_trend(&history(), &TimeZone::UTC)
        .into_iter()
        .map(|d| (d.date.to_string(), d.count))
        .collect();
    assert_eq!(
        trend,
        vec![
            ("2025-05-01".to_string(), 2),
            ("2025-05-02".to_string(), 1),
            ("2025-05-03".to_string(), 1),
        ]
    );
}

#[test]
fn daily_trend_respects_time_zone() {
    let plus_three = TimeZone::fixed(tz::offset(3));
    let dates: Vec<_> = daily_trend(&history(), &plus_three)
        .into_iter()
        .map(|d| d.date.to_string())
        .collect();
    assert_eq!(dates.last().map(String::as_str), Some("2025-05-04"));
}

#[test]
fn means_are_rounded_to_two_decimals() {
    let means: Vec<_> = scale_means(&history())
        .into_iter()
        .map(|m| (m.metric, m.mean))
        .collect();
    assert_eq!(
        means,
        vec![
            (Metric::Fugulin, Some(25.0)),
            (Metric::Mrc, Some(32.5)),
            (Metric::Triagem, Some(10.0)),
            (Metric::Charlson, Some(4.75)),
            (Metric::Index, Some(0.52)),
        ]
    );
}

#[test]
fn means_of_empty_history_are_absent() {
    assert!(scale_means(&[]).iter().all(|m| m.mean.is_none()));
}

#[test]
fn comparison_splits_high_risk_from_the_rest() {
    let comparison = high_risk_comparison(&history());
    let fugulin = &comparison[0];
    assert_eq!(fugulin.metric, Metric::Fugulin);
    assert_eq!(fugulin.high_risk_mean, Some(35.0));
    assert_eq!(fugulin.other_mean, Some(15.0));

    let mrc = &comparison[1];
    assert_eq!(mrc.high_risk_mean, Some(20.0));
    assert_eq!(mrc.other_mean, Some(45.0));
    assert_eq!(comparison.len(), 4);
}

#[test]
fn pearson_of_linear_columns() {
    assert!(approx(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0));
    assert!(approx(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0));
    assert_eq!(pearson(&[1.0], &[1.0]), None);
    assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let matrix = correlation_matrix(&history());
    for &a in &Metric::ALL {
        assert!(approx(matrix.get(a, a), 1.0), "diagonal for {a:?}");
        for &b in &Metric::ALL {
            assert_eq!(matrix.get(a, b), matrix.get(b, a));
        }
    }
    assert!(matrix.get(Metric::Fugulin, Metric::Index).unwrap() > 0.0);
    assert!(matrix.get(Metric::Mrc, Metric::Index).unwrap() < 0.0);
}

#[test]
fn correlation_is_undefined_for_single_record() {
    let one = &history()[..1];
    let matrix = correlation_matrix(one);
    assert_eq!(matrix.get(Metric::Fugulin, Metric::Index), None);
}

#[test]
fn latest_high_risk_is_newest_first() {
    assert_eq!(ids(&latest_high_risk(&history())), vec!["D", "B"]);
}

#[test]
fn tier_filter_selects_and_sorts() {
    let history = history();
    assert_eq!(
        ids(&filter_by_tiers(&history, &[RiskTier::Low, RiskTier::Moderate])),
        vec!["C", "A"]
    );
    assert_eq!(ids(&filter_by_tiers(&history, &[])), vec!["D", "C", "B", "A"]);
    assert!(filter_by_tiers(&history[..1], &[RiskTier::High]).is_empty());
}

#[test]
fn dashboard_bundles_every_view() {
    let dashboard = Dashboard::build(&history(), &TimeZone::UTC);
    assert_eq!(dashboard.summary.total, 4);
    assert_eq!(dashboard.distribution.len(), 3);
    assert_eq!(dashboard.daily.len(), 3);
    assert_eq!(ids(&dashboard.high_risk), vec!["D", "B"]);
}
