use serde::Serialize;

use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::RiskTier;

/// A numeric column of the evaluation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Fugulin,
    Mrc,
    Triagem,
    Charlson,
    Index,
}

impl Metric {
    /// Every metric, in dashboard order.
    pub const ALL: [Metric; 5] = [
        Metric::Fugulin,
        Metric::Mrc,
        Metric::Triagem,
        Metric::Charlson,
        Metric::Index,
    ];

    /// The raw clinical scales, without the composite index.
    pub const SCALES: [Metric; 4] = [Metric::Fugulin, Metric::Mrc, Metric::Triagem, Metric::Charlson];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Fugulin => "fugulin",
            Metric::Mrc => "mrc",
            Metric::Triagem => "triagem",
            Metric::Charlson => "charlson",
            Metric::Index => "index",
        }
    }

    pub fn value(&self, record: &EvaluationRecord) -> f64 {
        match self {
            Metric::Fugulin => f64::from(record.fugulin),
            Metric::Mrc => f64::from(record.mrc),
            Metric::Triagem => f64::from(record.triagem),
            Metric::Charlson => f64::from(record.charlson),
            Metric::Index => record.index,
        }
    }
}

// Same correctly rounded two-decimal rounding the index uses.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn mean<'a>(metric: Metric, records: impl IntoIterator<Item = &'a EvaluationRecord>) -> Option<f64> {
    let (sum, n) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), r| (sum + metric.value(r), n + 1));
    (n > 0).then(|| round2(sum / n as f64))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricMean {
    pub metric: Metric,
    /// Rounded to two decimals. `None` for an empty history.
    pub mean: Option<f64>,
}

/// Mean of each scale and of the index across the whole history.
pub fn scale_means(records: &[EvaluationRecord]) -> Vec<MetricMean> {
    Metric::ALL
        .iter()
        .map(|&metric| MetricMean {
            metric,
            mean: mean(metric, records),
        })
        .collect()
}

/// Pearson correlation of two columns. `None` with fewer than two rows or
/// when either column is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Symmetric correlation matrix over [`Metric::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    /// Row-major; `values[i][j]` correlates `metrics[i]` with `metrics[j]`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: Metric, b: Metric) -> Option<f64> {
        let i = self.metrics.iter().position(|m| *m == a)?;
        let j = self.metrics.iter().position(|m| *m == b)?;
        self.values.get(i)?.get(j).copied().flatten()
    }
}

pub fn correlation_matrix(records: &[EvaluationRecord]) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = Metric::ALL
        .iter()
        .map(|m| records.iter().map(|r| m.value(r)).collect())
        .collect();

    let values = columns
        .iter()
        .map(|xs| columns.iter().map(|ys| pearson(xs, ys)).collect())
        .collect();

    CorrelationMatrix {
        metrics: Metric::ALL.to_vec(),
        values,
    }
}

/// Scale means for high-risk patients against everyone else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleComparison {
    pub metric: Metric,
    pub high_risk_mean: Option<f64>,
    pub other_mean: Option<f64>,
}

pub fn high_risk_comparison(records: &[EvaluationRecord]) -> Vec<ScaleComparison> {
    let is_high = |r: &&EvaluationRecord| r.tier == RiskTier::High;
    Metric::SCALES
        .iter()
        .map(|&metric| ScaleComparison {
            metric,
            high_risk_mean: mean(metric, records.iter().filter(is_high)),
            other_mean: mean(metric, records.iter().filter(|r| !is_high(r))),
        })
        .collect()
}
