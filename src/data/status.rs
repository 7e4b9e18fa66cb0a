//! Status evaluation for sensor readings.
//!
//! Maps a reading (or a utilization percentage) to a discrete [`Status`]
//! with a display label and color. Everything here is pure: the same input
//! always yields the same decision.

use serde::{Deserialize, Serialize};

use super::metric::{Metric, MetricKind, StatusBasis};

/// Thresholds used for status computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Water level (m) above which the level is flagged.
    pub water_level_caution: f64,
    /// Pressure (MPa) above which the line is flagged.
    pub pressure_caution: f64,
    /// Pump current (A) above which the motor is flagged.
    pub pump_current_caution: f64,
    /// Utilization (%) at or above which equipment counts as running.
    pub utilization_running: f64,
    /// Utilization (%) at or above which equipment needs attention.
    pub utilization_caution: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            water_level_caution: 4.0,
            pressure_caution: 1.0,
            pump_current_caution: 10.0,
            utilization_running: 80.0,
            utilization_caution: 50.0,
        }
    }
}

/// Which rule decides a card's status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// Use each metric's own basis: utilization bands when a percentage is
    /// attached, per-metric thresholds otherwise.
    #[default]
    Auto,
    /// Judge every card by its utilization percentage (missing counts as 0).
    Utilization,
    /// Judge every card by its raw reading against per-metric thresholds.
    PerMetric,
}

/// Status of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running,
    Caution,
    Stopped,
    Normal,
    Open,
    Closed,
    Unknown,
}

pub const GREEN: &str = "#16a34a";
pub const AMBER: &str = "#f59e0b";
pub const RED: &str = "#ef4444";
pub const GRAY: &str = "#9ca3af";

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Caution => "caution",
            Status::Stopped => "stopped",
            Status::Normal => "normal",
            Status::Open => "open",
            Status::Closed => "closed",
            Status::Unknown => "unknown",
        }
    }

    pub fn label_ja(&self) -> &'static str {
        match self {
            Status::Running => "稼働中",
            Status::Caution => "注意",
            Status::Stopped => "停止",
            Status::Normal => "正常",
            Status::Open => "開",
            Status::Closed => "閉",
            Status::Unknown => "不明",
        }
    }

    /// Hex color of the status pill.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Running | Status::Normal | Status::Open => GREEN,
            Status::Caution => AMBER,
            Status::Stopped | Status::Closed => RED,
            Status::Unknown => GRAY,
        }
    }

    pub fn decision(self) -> StatusDecision {
        StatusDecision {
            status: self,
            label: self.label(),
            color: self.color(),
        }
    }
}

/// Label and color chosen for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDecision {
    pub status: Status,
    pub label: &'static str,
    pub color: &'static str,
}

/// Evaluates metrics under a configured [`StatusPolicy`].
#[derive(Debug, Clone, Default)]
pub struct MetricEvaluator {
    pub policy: StatusPolicy,
    pub thresholds: Thresholds,
}

impl MetricEvaluator {
    pub fn new(policy: StatusPolicy, thresholds: Thresholds) -> Self {
        Self { policy, thresholds }
    }

    /// Utilization-banded policy.
    pub fn utilization_status(&self, utilization: f64) -> StatusDecision {
        let status = if utilization >= self.thresholds.utilization_running {
            Status::Running
        } else if utilization >= self.thresholds.utilization_caution {
            Status::Caution
        } else {
            Status::Stopped
        };
        status.decision()
    }

    /// Per-metric threshold policy, looked up by name.
    ///
    /// Unknown names yield [`Status::Unknown`]. A missing value counts as 0.
    pub fn named_status(&self, name: &str, value: Option<f64>) -> StatusDecision {
        match MetricKind::from_name(name) {
            Some(kind) => self.reading_status(kind, value.unwrap_or(0.0)),
            None => Status::Unknown.decision(),
        }
    }

    /// Per-metric threshold policy for a known metric.
    pub fn reading_status(&self, kind: MetricKind, value: f64) -> StatusDecision {
        let t = &self.thresholds;
        let status = match kind {
            MetricKind::WaterLevel if value > t.water_level_caution => Status::Caution,
            MetricKind::WaterLevel => Status::Normal,
            MetricKind::PumpDischarge if value == 0.0 => Status::Stopped,
            MetricKind::PumpDischarge => Status::Running,
            MetricKind::ValveOpening if value == 0.0 => Status::Closed,
            MetricKind::ValveOpening => Status::Open,
            MetricKind::Pressure if value > t.pressure_caution => Status::Caution,
            MetricKind::Pressure => Status::Normal,
            MetricKind::PumpCurrent if value > t.pump_current_caution => Status::Caution,
            MetricKind::PumpCurrent => Status::Normal,
        };
        status.decision()
    }

    /// Evaluate a card under the configured policy.
    pub fn evaluate(&self, metric: &Metric) -> StatusDecision {
        match (self.policy, metric.status_basis) {
            (StatusPolicy::Utilization, basis) => {
                let utilization = match basis {
                    StatusBasis::Utilization(u) => u,
                    StatusBasis::Reading => 0.0,
                };
                self.utilization_status(utilization)
            }
            (StatusPolicy::PerMetric, _) | (StatusPolicy::Auto, StatusBasis::Reading) => {
                self.reading_status(metric.kind, metric.numeric_value)
            }
            (StatusPolicy::Auto, StatusBasis::Utilization(u)) => self.utilization_status(u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> MetricEvaluator {
        MetricEvaluator::default()
    }

    #[test]
    fn test_utilization_band_boundaries() {
        let e = evaluator();
        assert_eq!(e.utilization_status(80.0), Status::Running.decision());
        assert_eq!(e.utilization_status(80.0).color, GREEN);
        assert_eq!(e.utilization_status(79.99).status, Status::Caution);
        assert_eq!(e.utilization_status(50.0).label, "caution");
        assert_eq!(e.utilization_status(50.0).color, AMBER);
        assert_eq!(e.utilization_status(49.99).label, "stopped");
        assert_eq!(e.utilization_status(49.99).color, RED);
        assert_eq!(e.utilization_status(-5.0).status, Status::Stopped);
        assert_eq!(e.utilization_status(150.0).status, Status::Running);
    }

    #[test]
    fn test_water_level_boundary() {
        let e = evaluator();
        assert_eq!(e.reading_status(MetricKind::WaterLevel, 4.0).label, "normal");
        assert_eq!(e.reading_status(MetricKind::WaterLevel, 4.01).label, "caution");
    }

    #[test]
    fn test_per_metric_rules() {
        let e = evaluator();
        assert_eq!(e.reading_status(MetricKind::PumpDischarge, 0.0).status, Status::Stopped);
        assert_eq!(e.reading_status(MetricKind::PumpDischarge, 0.1).status, Status::Running);
        assert_eq!(e.reading_status(MetricKind::ValveOpening, 0.0).status, Status::Closed);
        assert_eq!(e.reading_status(MetricKind::ValveOpening, 35.0).status, Status::Open);
        assert_eq!(e.reading_status(MetricKind::Pressure, 1.0).status, Status::Normal);
        assert_eq!(e.reading_status(MetricKind::Pressure, 1.2).status, Status::Caution);
        assert_eq!(e.reading_status(MetricKind::PumpCurrent, 10.0).status, Status::Normal);
        assert_eq!(e.reading_status(MetricKind::PumpCurrent, 10.5).status, Status::Caution);
    }

    #[test]
    fn test_named_status_unknown_and_missing() {
        let e = evaluator();
        let unknown = e.named_status("turbidity", Some(12.0));
        assert_eq!(unknown.label, "unknown");
        assert_eq!(unknown.color, GRAY);
        assert_eq!(e.named_status("", None).status, Status::Unknown);

        // Missing value defaults to 0
        assert_eq!(e.named_status("揚水量", None).status, Status::Stopped);
        assert_eq!(e.named_status("valve opening", None).status, Status::Closed);
        assert_eq!(e.named_status("水位", None).status, Status::Normal);
    }

    #[test]
    fn test_every_decision_is_a_defined_pair() {
        let e = evaluator();
        let names = ["水位", "pump_discharge", "valve", "圧力", "current", "bogus"];
        let values = [-10.0, 0.0, 0.5, 1.0, 4.0, 4.01, 10.0, 80.0, 1e9, f64::NAN];
        for name in names {
            for value in values {
                let d = e.named_status(name, Some(value));
                assert_eq!(d, d.status.decision());
            }
        }
    }

    #[test]
    fn test_zero_discharge_stops_regardless_of_utilization() {
        let e = MetricEvaluator::new(StatusPolicy::PerMetric, Thresholds::default());
        let m = Metric::with_utilization(MetricKind::PumpDischarge, "0 m3/h", 0.0, 95.0);
        let d = e.evaluate(&m);
        assert_eq!(d.label, "stopped");
        assert_eq!(d.color, RED);
    }

    #[test]
    fn test_policy_dispatch() {
        let sample = Metric::with_utilization(MetricKind::PumpCurrent, "45 A", 45.0, 48.0);
        let loaded = Metric::from_reading(MetricKind::PumpCurrent, 45.0, 2);

        let auto = MetricEvaluator::new(StatusPolicy::Auto, Thresholds::default());
        assert_eq!(auto.evaluate(&sample).status, Status::Stopped);
        assert_eq!(auto.evaluate(&loaded).status, Status::Caution);

        let util = MetricEvaluator::new(StatusPolicy::Utilization, Thresholds::default());
        assert_eq!(util.evaluate(&loaded).status, Status::Stopped);

        let per_metric = MetricEvaluator::new(StatusPolicy::PerMetric, Thresholds::default());
        assert_eq!(per_metric.evaluate(&sample).status, Status::Caution);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            water_level_caution: 3.0,
            ..Thresholds::default()
        };
        let e = MetricEvaluator::new(StatusPolicy::PerMetric, thresholds);
        assert_eq!(e.reading_status(MetricKind::WaterLevel, 3.2).status, Status::Caution);
    }
}
