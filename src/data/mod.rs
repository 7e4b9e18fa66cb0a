//! Data models and status evaluation for pumping-test readings.
//!
//! ## Submodules
//!
//! - [`format`]: Number formatting with units and fixed precision
//! - [`metric`]: The five sensor metrics ([`MetricKind`], [`Metric`]) and sample values
//! - [`series`]: Water level / discharge time series and the seeded sample generator
//! - [`status`]: Status policies ([`MetricEvaluator`], [`Thresholds`], [`Status`])
//!
//! ## Data Flow
//!
//! ```text
//! SensorTable (last row)          SensorTable (all rows) / SampleParams
//!        │                                   │
//!        ▼                                   ▼
//!   Metric::from_reading()        series_from_columns() / sample_series()
//!        │                                   │
//!        ▼                                   ▼
//! MetricEvaluator::evaluate()         Vec<TimeSeriesPoint>
//!        │
//!        └──▶ StatusDecision (label, color)
//! ```

pub mod format;
pub mod metric;
pub mod series;
pub mod status;

pub use metric::{sample_metrics, Metric, MetricKind, StatusBasis};
pub use series::{sample_series, series_from_columns, SampleParams, TimeSeriesPoint};
pub use status::{MetricEvaluator, Status, StatusDecision, StatusPolicy, Thresholds};
