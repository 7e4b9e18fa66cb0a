//! Dashboard assembly.
//!
//! [`Dashboard::build`] performs one render's worth of work: load the data
//! source once, turn the last row into cards and all rows into a chart
//! series, evaluate statuses, and fall back to sample data when anything
//! goes wrong. The result is a plain model that the `ui` module turns into
//! HTML and the binary can export as JSON.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::data::{
    sample_metrics, sample_series, Metric, MetricEvaluator, StatusDecision, TimeSeriesPoint,
};
use crate::source::DataSource;

/// What replaces the file data when it can't be used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Sample cards and the sample chart.
    #[default]
    Sample,
    /// Sample cards; the chart is left out.
    CardsOnly,
}

/// Where a part of the page got its numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    File,
    Sample,
}

/// A metric together with its evaluated status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub metric: Metric,
    pub status: StatusDecision,
}

/// Series shown on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub origin: DataOrigin,
    pub points: Vec<TimeSeriesPoint>,
    /// Whether x-axis zoom is offered.
    pub zoom: bool,
}

/// Everything one render displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub generated_at: NaiveDateTime,
    /// Description of the data source, e.g. `file: pumping_test.xlsx`.
    pub source: String,
    pub card_origin: DataOrigin,
    pub cards: Vec<Card>,
    /// `None` when the chart was suppressed by [`FallbackPolicy::CardsOnly`].
    pub chart: Option<ChartData>,
    /// User-visible load errors, in the order they occurred.
    pub errors: Vec<String>,
}

impl Dashboard {
    /// Build the dashboard model.
    ///
    /// `source` is `None` when sample data was requested explicitly. Load
    /// failures never propagate: they are recorded in
    /// [`errors`](Dashboard::errors) and the configured fallback applies.
    pub fn build(
        source: Option<&mut dyn DataSource>,
        config: &DashboardConfig,
        generated_at: NaiveDateTime,
    ) -> Self {
        let evaluator = MetricEvaluator::new(config.render.policy, config.thresholds.clone());

        let Some(source) = source else {
            info!("rendering sample data");
            return Self {
                generated_at,
                source: "sample data".to_string(),
                card_origin: DataOrigin::Sample,
                cards: evaluate(&evaluator, sample_metrics()),
                chart: Some(Self::sample_chart(config)),
                errors: Vec::new(),
            };
        };

        let description = source.description().to_string();
        let mut errors: Vec<String> = Vec::new();
        let mut record = |message: String| {
            if !errors.contains(&message) {
                errors.push(message);
            }
        };

        let (metrics, series) = match source.load() {
            Ok(table) => {
                let columns = &config.data.columns;
                let metrics = table
                    .latest_metrics(columns, config.render.precision)
                    .map_err(|e| record(e.to_string()))
                    .ok();
                let series = table
                    .series(columns)
                    .map_err(|e| record(e.to_string()))
                    .ok();
                (metrics, series)
            }
            Err(e) => {
                warn!(
                    source = %description,
                    error = source.error().unwrap_or_default(),
                    "data source failed to load"
                );
                record(e.to_string());
                (None, None)
            }
        };

        let (card_origin, metrics) = match metrics {
            Some(metrics) => (DataOrigin::File, metrics),
            None => {
                warn!(source = %description, "cards fall back to sample data");
                (DataOrigin::Sample, sample_metrics())
            }
        };

        let chart = match series {
            Some(points) if !points.is_empty() => Some(ChartData {
                origin: DataOrigin::File,
                points,
                zoom: config.render.zoom,
            }),
            Some(_) => {
                record("No rows with both water level and pump discharge".to_string());
                Self::fallback_chart(config)
            }
            None => Self::fallback_chart(config),
        };

        info!(
            source = %description,
            cards = ?card_origin,
            chart = ?chart.as_ref().map(|c| c.origin),
            errors = errors.len(),
            "dashboard assembled"
        );

        Self {
            generated_at,
            source: description,
            card_origin,
            cards: evaluate(&evaluator, metrics),
            chart,
            errors,
        }
    }

    /// True when any part of the page is not showing file data.
    pub fn is_fallback(&self) -> bool {
        self.card_origin == DataOrigin::Sample
            || self.chart.as_ref().map_or(true, |c| c.origin == DataOrigin::Sample)
    }

    fn fallback_chart(config: &DashboardConfig) -> Option<ChartData> {
        match config.data.fallback {
            FallbackPolicy::Sample => {
                warn!("chart falls back to sample data");
                Some(Self::sample_chart(config))
            }
            FallbackPolicy::CardsOnly => {
                warn!("chart omitted");
                None
            }
        }
    }

    fn sample_chart(config: &DashboardConfig) -> ChartData {
        ChartData {
            origin: DataOrigin::Sample,
            points: sample_series(&config.sample),
            zoom: false,
        }
    }
}

fn evaluate(evaluator: &MetricEvaluator, metrics: Vec<Metric>) -> Vec<Card> {
    metrics
        .into_iter()
        .map(|metric| {
            let status = evaluator.evaluate(&metric);
            Card { metric, status }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MetricKind, Status, StatusPolicy};
    use crate::source::{MemorySource, SensorTable};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn full_table(rows: usize, last_discharge: &str) -> SensorTable {
        let headers = ["水位", "揚水量", "バルブ開閉率", "揚水圧力", "ポンプ電流値"];
        let data: Vec<Vec<String>> = (0..rows)
            .map(|i| {
                let discharge = if i + 1 == rows {
                    last_discharge.to_string()
                } else {
                    "120".to_string()
                };
                vec![
                    format!("{:.2}", 3.0 + i as f64 * 0.05),
                    discharge,
                    "40".to_string(),
                    "0.7".to_string(),
                    "9.1".to_string(),
                ]
            })
            .collect();
        SensorTable::from_text(headers, data)
    }

    #[test]
    fn test_file_data_builds_cards_and_chart() {
        let mut source = MemorySource::new(full_table(10, "118.4"), "ten rows");
        let dashboard =
            Dashboard::build(Some(&mut source), &DashboardConfig::default(), now());

        assert!(dashboard.errors.is_empty());
        assert_eq!(dashboard.card_origin, DataOrigin::File);
        assert_eq!(dashboard.cards.len(), 5);
        assert_eq!(dashboard.cards[0].metric.display_value, "3.45 m");
        assert_eq!(dashboard.cards[1].metric.numeric_value, 118.4);
        assert_eq!(dashboard.source, "memory: ten rows");

        let chart = dashboard.chart.as_ref().unwrap();
        assert_eq!(chart.origin, DataOrigin::File);
        assert_eq!(chart.points.len(), 10);
        assert!(chart.zoom);
        assert!(!dashboard.is_fallback());
    }

    #[test]
    fn test_zero_discharge_card_is_stopped() {
        let mut source = MemorySource::new(full_table(3, "0"), "stopped pump");
        let dashboard =
            Dashboard::build(Some(&mut source), &DashboardConfig::default(), now());
        let discharge = &dashboard.cards[1];
        assert_eq!(discharge.metric.kind, MetricKind::PumpDischarge);
        assert_eq!(discharge.status.status, Status::Stopped);
    }

    #[test]
    fn test_missing_column_falls_back_to_sample() {
        let table = SensorTable::from_text(
            ["水位", "バルブ開閉率", "揚水圧力", "ポンプ電流値"],
            vec![vec!["3.0", "40", "0.7", "9.1"]],
        );
        let mut source = MemorySource::new(table, "no discharge");
        let dashboard =
            Dashboard::build(Some(&mut source), &DashboardConfig::default(), now());

        // Cards and series hit the same missing column; reported once
        assert_eq!(dashboard.errors, vec!["Missing required column: pump discharge"]);
        assert_eq!(dashboard.card_origin, DataOrigin::Sample);
        assert_eq!(dashboard.cards.len(), 5);
        assert!(dashboard.cards.iter().all(|c| c.metric.utilization().is_some()));

        let chart = dashboard.chart.as_ref().unwrap();
        assert_eq!(chart.origin, DataOrigin::Sample);
        assert!(!chart.zoom);
        assert!(dashboard.is_fallback());
    }

    #[test]
    fn test_cards_only_fallback_omits_chart() {
        let mut config = DashboardConfig::default();
        config.data.fallback = FallbackPolicy::CardsOnly;

        let mut source = MemorySource::empty("nothing");
        let dashboard = Dashboard::build(Some(&mut source), &config, now());

        assert_eq!(dashboard.errors, vec!["Spreadsheet has no data rows"]);
        assert_eq!(dashboard.card_origin, DataOrigin::Sample);
        assert!(dashboard.chart.is_none());
    }

    #[test]
    fn test_explicit_sample_has_no_errors() {
        let dashboard = Dashboard::build(None, &DashboardConfig::default(), now());
        assert!(dashboard.errors.is_empty());
        assert_eq!(dashboard.source, "sample data");
        assert_eq!(dashboard.chart.as_ref().unwrap().points.len(), 30);

        // Sample utilizations: 70, 90, 60, 55, 48
        let labels: Vec<&str> = dashboard.cards.iter().map(|c| c.status.label).collect();
        assert_eq!(labels, vec!["caution", "running", "caution", "caution", "stopped"]);
    }

    #[test]
    fn test_policy_from_config() {
        let mut config = DashboardConfig::default();
        config.render.policy = StatusPolicy::PerMetric;
        let dashboard = Dashboard::build(None, &config, now());
        // Per-metric: 3.2 m normal, 120 running, 60% open, 1.8 MPa caution, 45 A caution
        let labels: Vec<&str> = dashboard.cards.iter().map(|c| c.status.label).collect();
        assert_eq!(labels, vec!["normal", "running", "open", "caution", "caution"]);
    }

    #[test]
    fn test_chart_without_complete_rows_falls_back() {
        let table = SensorTable::from_text(
            ["水位", "揚水量", "バルブ開閉率", "揚水圧力", "ポンプ電流値"],
            vec![vec!["", "120", "40", "0.7", "9.1"]],
        );
        let mut source = MemorySource::new(table, "gaps");
        let dashboard =
            Dashboard::build(Some(&mut source), &DashboardConfig::default(), now());

        assert_eq!(dashboard.card_origin, DataOrigin::File);
        assert_eq!(dashboard.cards[0].metric.numeric_value, 0.0);
        assert_eq!(dashboard.errors.len(), 1);
        assert_eq!(dashboard.chart.as_ref().unwrap().origin, DataOrigin::Sample);
    }
}
