//! # pumpwatch
//!
//! An operations dashboard for pumping tests, rendered as a single HTML page.
//!
//! Each render reads the sensor log (water level, pump discharge, valve
//! opening, pressure, pump current) once, shows the latest row as five
//! status cards, and charts water level against pump discharge over
//! elapsed time. When the log can't be read, the page says so and shows
//! sample data instead.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Render                              │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐  │
//! │  │ source  │───▶│   app    │───▶│   ui    │───▶│  HTML   │  │
//! │  │ (input) │    │(assembly)│    │(render) │    │  page   │  │
//! │  └─────────┘    └────┬─────┘    └─────────┘    └─────────┘  │
//! │                      │                                      │
//! │                      ▼                                      │
//! │                 ┌─────────┐                                 │
//! │                 │  data   │◀── MetricEvaluator, series      │
//! │                 └─────────┘                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   spreadsheet ([`FileSource`]) and in-memory ([`MemorySource`]) implementations
//! - **[`data`]**: Metrics, status evaluation ([`MetricEvaluator`]), and the
//!   time series with its seeded sample generator
//! - **[`app`]**: [`Dashboard`] assembly, including the fallback to sample data
//! - **[`ui`]**: HTML rendering - cards, Chart.js options, legend, themes, locales
//! - **[`config`]**: Layered configuration (defaults, TOML, environment)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Render the default spreadsheet to dashboard.html
//! pumpwatch --file pumping_test.xlsx
//!
//! # Japanese page from a CSV export, written to stdout
//! pumpwatch --file log.csv --locale ja --output -
//! ```
//!
//! ### As a library
//!
//! ```
//! use pumpwatch::{render_page, Dashboard, DashboardConfig, MemorySource, SensorTable};
//!
//! let table = SensorTable::from_text(
//!     ["水位", "揚水量", "バルブ開閉率", "揚水圧力", "ポンプ電流値"],
//!     vec![vec!["3.4", "118", "60", "0.9", "9.5"]],
//! );
//! let mut source = MemorySource::new(table, "logger");
//! let config = DashboardConfig::default();
//!
//! let now = chrono::Local::now().naive_local();
//! let dashboard = Dashboard::build(Some(&mut source), &config, now);
//! assert!(dashboard.errors.is_empty());
//!
//! let html = render_page(&dashboard, &config);
//! assert!(html.contains("3.40 m"));
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{Card, ChartData, Dashboard, DataOrigin, FallbackPolicy};
pub use config::DashboardConfig;
pub use data::{
    Metric, MetricEvaluator, MetricKind, SampleParams, Status, StatusDecision, StatusPolicy,
    Thresholds, TimeSeriesPoint,
};
pub use source::{DataSource, FileSource, MemorySource, SensorTable, SourceError};
pub use ui::render_page;
