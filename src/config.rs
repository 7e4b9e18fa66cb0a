//! Layered configuration.
//!
//! Values are resolved in order, later layers winning:
//!
//! 1. Built-in defaults ([`DashboardConfig::default`])
//! 2. An optional TOML file
//! 3. Environment variables prefixed `PUMPWATCH`, nested with `__`
//!    (e.g. `PUMPWATCH__THRESHOLDS__WATER_LEVEL_CAUTION=3.5`)
//! 4. Command-line flags, applied by the binary
//!
//! ```toml
//! [data]
//! path = "logs/pumping_test.xlsx"
//! sheet = "Log"
//! fallback = "cards-only"
//!
//! [data.columns]
//! water_level = "WL (m)"
//!
//! [thresholds]
//! water_level_caution = 4.0
//!
//! [render]
//! policy = "per-metric"
//! locale = "ja"
//! water_axis = { mode = "fixed", min = 0.0, max = 5.0 }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::app::FallbackPolicy;
use crate::data::{SampleParams, StatusPolicy, Thresholds};
use crate::source::ColumnOverrides;
use crate::ui::{AxisBounds, Locale, ThemeName};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PUMPWATCH";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub thresholds: Thresholds,
    pub sample: SampleParams,
    pub render: RenderConfig,
}

/// Where readings come from and what happens when they can't be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Spreadsheet to load.
    pub path: PathBuf,
    /// Worksheet name; the first sheet when unset.
    pub sheet: Option<String>,
    /// Skip the file entirely and show sample data.
    pub use_sample: bool,
    /// Header name overrides per metric.
    pub columns: ColumnOverrides,
    pub fallback: FallbackPolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pumping_test.xlsx"),
            sheet: None,
            use_sample: false,
            columns: ColumnOverrides::new(),
            fallback: FallbackPolicy::default(),
        }
    }
}

/// Page presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page title; a localized default when unset.
    pub title: Option<String>,
    pub policy: StatusPolicy,
    /// Decimal places for card values read from a file.
    pub precision: usize,
    pub theme: ThemeName,
    pub locale: Locale,
    pub water_axis: AxisBounds,
    /// Allow x-axis zoom on charts built from file data.
    pub zoom: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            policy: StatusPolicy::default(),
            precision: 2,
            theme: ThemeName::default(),
            locale: Locale::default(),
            water_axis: AxisBounds::default(),
            zoom: true,
        }
    }
}

/// Highest precision accepted for card values.
const MAX_PRECISION: usize = 6;

impl DashboardConfig {
    /// Load configuration from an optional file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Load configuration from an optional file plus the given environment source.
    pub fn load_from(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(env)
            .build()
            .with_context(|| match path {
                Some(p) => format!("Failed to read config file {}", p.display()),
                None => "Failed to read configuration".to_string(),
            })?;

        let parsed: DashboardConfig =
            config.try_deserialize().context("Invalid configuration")?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject settings that would produce a misleading page.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.utilization_caution > t.utilization_running {
            bail!(
                "utilization_caution ({}) must not exceed utilization_running ({})",
                t.utilization_caution,
                t.utilization_running
            );
        }
        if self.render.precision > MAX_PRECISION {
            bail!(
                "precision {} is out of range (0-{})",
                self.render.precision,
                MAX_PRECISION
            );
        }
        match self.render.water_axis {
            AxisBounds::Derived { margin } if margin < 0.0 || !margin.is_finite() => {
                bail!("water_axis margin must be a non-negative number, got {}", margin)
            }
            AxisBounds::Fixed { min, max } if min >= max || min.is_nan() || max.is_nan() => {
                bail!("water_axis min ({}) must be below max ({})", min, max)
            }
            _ => {}
        }
        Ok(())
    }
}
