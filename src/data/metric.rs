//! Sensor metrics shown on the dashboard cards.

use serde::{Deserialize, Serialize};

use super::format::format_value;

/// The fixed set of sensor readings taken during a pumping test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    WaterLevel,
    PumpDischarge,
    ValveOpening,
    Pressure,
    PumpCurrent,
}

impl MetricKind {
    /// All metrics in card order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::WaterLevel,
        MetricKind::PumpDischarge,
        MetricKind::ValveOpening,
        MetricKind::Pressure,
        MetricKind::PumpCurrent,
    ];

    /// Stable snake_case key, used in config files and JSON export.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::WaterLevel => "water_level",
            MetricKind::PumpDischarge => "pump_discharge",
            MetricKind::ValveOpening => "valve_opening",
            MetricKind::Pressure => "pressure",
            MetricKind::PumpCurrent => "pump_current",
        }
    }

    /// Unit appended to the formatted value.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::WaterLevel => "m",
            MetricKind::PumpDischarge => "m3/h",
            MetricKind::ValveOpening => "%",
            MetricKind::Pressure => "MPa",
            MetricKind::PumpCurrent => "A",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            MetricKind::WaterLevel => "Water level",
            MetricKind::PumpDischarge => "Pump discharge",
            MetricKind::ValveOpening => "Valve opening",
            MetricKind::Pressure => "Pressure",
            MetricKind::PumpCurrent => "Pump current",
        }
    }

    pub fn name_ja(&self) -> &'static str {
        match self {
            MetricKind::WaterLevel => "水位",
            MetricKind::PumpDischarge => "揚水量",
            MetricKind::ValveOpening => "バルブ開閉率",
            MetricKind::Pressure => "揚水圧力",
            MetricKind::PumpCurrent => "ポンプ電流値",
        }
    }

    /// Spreadsheet header names accepted for this metric.
    ///
    /// The field sheets are written in Japanese, so the Japanese labels
    /// come first. Matching is case-insensitive for ASCII.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            MetricKind::WaterLevel => &["水位", "water_level", "water level", "level"],
            MetricKind::PumpDischarge => &[
                "揚水量",
                "pump_discharge",
                "pump discharge",
                "discharge",
            ],
            MetricKind::ValveOpening => &[
                "バルブ開閉率",
                "バルブ開度",
                "バブル開閉率",
                "valve_opening",
                "valve opening",
                "valve",
            ],
            MetricKind::Pressure => &["揚水圧力", "圧力", "pressure"],
            MetricKind::PumpCurrent => &[
                "ポンプ電流値",
                "ポンプ電流",
                "pump_current",
                "pump current",
                "current",
            ],
        }
    }

    /// Resolve a metric from its key, English name, or any header alias.
    pub fn from_name(name: &str) -> Option<MetricKind> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| {
            kind.key().eq_ignore_ascii_case(name)
                || kind.name_en().eq_ignore_ascii_case(name)
                || kind.name_ja() == name
                || kind.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }
}

/// What a card's status is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", content = "value", rename_all = "snake_case")]
pub enum StatusBasis {
    /// Compare the raw reading against the metric's own threshold.
    Reading,
    /// Compare a 0-100 utilization percentage against the shared bands.
    Utilization(f64),
}

/// A single reading prepared for display.
///
/// Built fresh on every render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub name: String,
    pub display_value: String,
    pub numeric_value: f64,
    pub status_basis: StatusBasis,
}

impl Metric {
    /// A metric judged by its raw reading, formatted with `precision` decimals.
    pub fn from_reading(kind: MetricKind, value: f64, precision: usize) -> Self {
        Self {
            kind,
            name: kind.key().to_string(),
            display_value: format_value(value, kind.unit(), precision),
            numeric_value: value,
            status_basis: StatusBasis::Reading,
        }
    }

    /// A metric with a literal display string and a utilization percentage.
    pub fn with_utilization(
        kind: MetricKind,
        display_value: impl Into<String>,
        value: f64,
        utilization: f64,
    ) -> Self {
        Self {
            kind,
            name: kind.key().to_string(),
            display_value: display_value.into(),
            numeric_value: value,
            status_basis: StatusBasis::Utilization(utilization),
        }
    }

    pub fn utilization(&self) -> Option<f64> {
        match self.status_basis {
            StatusBasis::Utilization(u) => Some(u),
            StatusBasis::Reading => None,
        }
    }
}

/// The hardcoded readings shown when no spreadsheet can be loaded.
pub fn sample_metrics() -> Vec<Metric> {
    vec![
        Metric::with_utilization(MetricKind::WaterLevel, "3.2 m", 3.2, 70.0),
        Metric::with_utilization(MetricKind::PumpDischarge, "120 m3/h", 120.0, 90.0),
        Metric::with_utilization(MetricKind::ValveOpening, "60%", 60.0, 60.0),
        Metric::with_utilization(MetricKind::Pressure, "1.8 MPa", 1.8, 55.0),
        Metric::with_utilization(MetricKind::PumpCurrent, "45 A", 45.0, 48.0),
    ]
}
