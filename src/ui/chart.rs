//! Chart.js options for the water level / discharge chart.
//!
//! The chart is fully declarative: this module builds the JSON passed to
//! `new Chart(ctx, config)` and nothing else. Water level sits on the left
//! axis with a dashed reference line at the low water threshold; pump
//! discharge sits on an independently scaled right axis.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::locale::Strings;
use super::theme::Theme;
use crate::app::ChartData;
use crate::data::series::level_range;

/// Domain of the water level axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AxisBounds {
    /// Series min/max (and the threshold line) widened by `margin` metres.
    Derived { margin: f64 },
    /// A fixed range.
    Fixed { min: f64, max: f64 },
}

impl Default for AxisBounds {
    fn default() -> Self {
        AxisBounds::Derived { margin: 0.5 }
    }
}

impl AxisBounds {
    /// Resolve to a concrete `(min, max)` for the given chart.
    ///
    /// The threshold is kept inside a derived range so the reference line
    /// stays visible.
    pub fn resolve(&self, chart: &ChartData, threshold: f64) -> (f64, f64) {
        match *self {
            AxisBounds::Fixed { min, max } => (min, max),
            AxisBounds::Derived { margin } => {
                let (lo, hi) = level_range(&chart.points).unwrap_or((threshold, threshold));
                (lo.min(threshold) - margin, hi.max(threshold) + margin)
            }
        }
    }
}

/// Build the Chart.js configuration object.
pub fn chart_config(
    chart: &ChartData,
    bounds: &AxisBounds,
    threshold: f64,
    theme: &Theme,
    strings: &Strings,
) -> Value {
    let water: Vec<Value> = chart
        .points
        .iter()
        .map(|p| json!({ "x": p.elapsed_minutes, "y": p.water_level_m }))
        .collect();
    let discharge: Vec<Value> = chart
        .points
        .iter()
        .map(|p| json!({ "x": p.elapsed_minutes, "y": p.pump_discharge }))
        .collect();

    let first = chart.points.first().map_or(0, |p| p.elapsed_minutes);
    let last = chart.points.last().map_or(0, |p| p.elapsed_minutes);
    let reference = vec![
        json!({ "x": first, "y": threshold }),
        json!({ "x": last, "y": threshold }),
    ];

    let (y_min, y_max) = bounds.resolve(chart, threshold);

    let mut plugins = json!({
        "legend": { "labels": { "color": theme.text } },
        "tooltip": { "mode": "index", "intersect": false },
    });
    if chart.zoom {
        plugins["zoom"] = json!({
            "zoom": {
                "drag": { "enabled": true },
                "mode": "x",
            },
            "limits": { "x": { "min": "original", "max": "original" } },
        });
    }

    json!({
        "type": "line",
        "data": {
            "datasets": [
                {
                    "label": strings.water_level,
                    "data": water,
                    "yAxisID": "yLevel",
                    "borderColor": theme.water_level,
                    "backgroundColor": theme.water_level,
                    "borderWidth": 2,
                    "pointRadius": 0,
                    "tension": 0.2,
                },
                {
                    "label": strings.discharge,
                    "data": discharge,
                    "yAxisID": "yDischarge",
                    "borderColor": theme.discharge,
                    "backgroundColor": theme.discharge,
                    "borderWidth": 2,
                    "pointRadius": 0,
                    "tension": 0.2,
                },
                {
                    "label": format!("{} ({} m)", strings.threshold, threshold),
                    "data": reference,
                    "yAxisID": "yLevel",
                    "borderColor": theme.threshold,
                    "borderDash": [6, 4],
                    "borderWidth": 1.5,
                    "pointRadius": 0,
                    "fill": false,
                },
            ],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": false,
            "interaction": { "mode": "index", "intersect": false },
            "scales": {
                "x": {
                    "type": "linear",
                    "title": { "display": true, "text": strings.elapsed, "color": theme.muted },
                    "ticks": { "color": theme.muted, "precision": 0 },
                    "grid": { "color": theme.grid },
                },
                "yLevel": {
                    "type": "linear",
                    "position": "left",
                    "min": y_min,
                    "max": y_max,
                    "title": { "display": true, "text": strings.water_level, "color": theme.muted },
                    "ticks": { "color": theme.muted },
                    "grid": { "color": theme.grid },
                },
                "yDischarge": {
                    "type": "linear",
                    "position": "right",
                    "title": { "display": true, "text": strings.discharge, "color": theme.muted },
                    "ticks": { "color": theme.muted },
                    "grid": { "drawOnChartArea": false },
                },
            },
            "plugins": plugins,
        },
    })
}
