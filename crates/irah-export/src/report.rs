use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use irah_analytics::dashboard::Dashboard;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "dashboard.txt";

/// Default plain-text dashboard layout.
pub const DASHBOARD_TEMPLATE: &str = r#"IRAH - Hospital Assistential Risk Index
=======================================

Total evaluations: {{ summary.total }}
High risk:         {{ summary.high_risk }}
Latest evaluation: {{ summary.latest }}

Risk distribution
-----------------
{% for row in distribution -%}
{{ row.label }}: {{ row.count }}
{% endfor %}
Evaluations per day
-------------------
{% for row in daily -%}
{{ row.date }}: {{ row.count }}
{% endfor %}
Scale means
-----------
{% for row in means -%}
{{ row.metric }}: {{ row.value }}
{% endfor %}
High risk vs low/moderate
-------------------------
{% for row in comparison -%}
{{ row.metric }}: {{ row.high_risk }} vs {{ row.other }}
{% endfor %}
Correlation
-----------
{{ correlation_header }}
{% for row in correlation -%}
{{ row }}
{% endfor %}
High-risk patients (newest first)
---------------------------------
{% for row in high_risk -%}
{{ row.timestamp }}  {{ row.case_id }}  {{ row.index }}
{% endfor %}"#;

const MISSING: &str = "n/a";

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}"))
}

#[derive(Serialize)]
struct CountRow {
    label: String,
    count: usize,
}

#[derive(Serialize)]
struct DayRow {
    date: String,
    count: usize,
}

#[derive(Serialize)]
struct ValueRow {
    metric: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ComparisonRow {
    metric: &'static str,
    high_risk: String,
    other: String,
}

#[derive(Serialize)]
struct PatientRow {
    timestamp: String,
    case_id: String,
    index: String,
}

#[derive(Serialize)]
struct SummaryRow {
    total: usize,
    high_risk: usize,
    latest: String,
}

/// The dashboard with every number pre-formatted for display.
#[derive(Serialize)]
struct ReportContext {
    summary: SummaryRow,
    distribution: Vec<CountRow>,
    daily: Vec<DayRow>,
    means: Vec<ValueRow>,
    comparison: Vec<ComparisonRow>,
    correlation_header: String,
    correlation: Vec<String>,
    high_risk: Vec<PatientRow>,
}

impl ReportContext {
    fn new(dashboard: &Dashboard) -> Self {
        let correlation_header = std::iter::once(format!("{:<10}", ""))
            .chain(
                dashboard
                    .correlation
                    .metrics
                    .iter()
                    .map(|m| format!("{:>9}", m.name())),
            )
            .collect::<String>();

        let correlation = dashboard
            .correlation
            .metrics
            .iter()
            .zip(&dashboard.correlation.values)
            .map(|(metric, cells)| {
                std::iter::once(format!("{:<10}", metric.name()))
                    .chain(cells.iter().map(|c| format!("{:>9}", fmt_opt(*c))))
                    .collect::<String>()
            })
            .collect();

        Self {
            summary: SummaryRow {
                total: dashboard.summary.total,
                high_risk: dashboard.summary.high_risk,
                latest: dashboard
                    .summary
                    .latest
                    .map_or_else(|| "none".to_string(), |t| t.to_string()),
            },
            distribution: dashboard
                .distribution
                .iter()
                .map(|c| CountRow {
                    label: c.label.to_string(),
                    count: c.count,
                })
                .collect(),
            daily: dashboard
                .daily
                .iter()
                .map(|d| DayRow {
                    date: d.date.to_string(),
                    count: d.count,
                })
                .collect(),
            means: dashboard
                .means
                .iter()
                .map(|m| ValueRow {
                    metric: m.metric.name(),
                    value: fmt_opt(m.mean),
                })
                .collect(),
            comparison: dashboard
                .comparison
                .iter()
                .map(|c| ComparisonRow {
                    metric: c.metric.name(),
                    high_risk: fmt_opt(c.high_risk_mean),
                    other: fmt_opt(c.other_mean),
                })
                .collect(),
            correlation_header,
            correlation,
            high_risk: dashboard
                .high_risk
                .iter()
                .map(|r| PatientRow {
                    timestamp: r.timestamp.to_string(),
                    case_id: r.case_id.clone(),
                    index: format!("{:.2}", r.index),
                })
                .collect(),
        }
    }
}

/// Render the dashboard with [`DASHBOARD_TEMPLATE`].
pub fn render_dashboard(dashboard: &Dashboard) -> Result<String, ExportError> {
    render_dashboard_with(DASHBOARD_TEMPLATE, dashboard)
}

/// Render the dashboard with a caller-supplied Tera template.
///
/// Numbers arrive pre-formatted as strings (two decimals, `n/a` when undefined).
pub fn render_dashboard_with(
    template_content: &str,
    dashboard: &Dashboard,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::new(dashboard))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    debug!(bytes = rendered.len(), "dashboard rendered");
    Ok(rendered)
}
