//! Water level / discharge time series.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use super::format::round_to;

/// One sample on the chart's x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub elapsed_minutes: u32,
    pub water_level_m: f64,
    pub pump_discharge: f64,
}

/// Parameters for the synthetic series shown when no data file is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleParams {
    pub seed: u64,
    /// Number of one-minute samples.
    pub points: u32,
    pub base_level: f64,
    /// Total rise of the water level over the whole series.
    pub level_trend: f64,
    /// Standard deviation of the water level noise.
    pub level_noise: f64,
    pub base_discharge: f64,
    pub discharge_noise: f64,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            seed: 42,
            points: 30,
            base_level: 3.0,
            level_trend: 0.15,
            level_noise: 0.05,
            base_discharge: 120.0,
            discharge_noise: 2.0,
        }
    }
}

/// Generate the sample series.
///
/// Water level follows a linear trend from `base_level` to
/// `base_level + level_trend` with normal noise; discharge is normal noise
/// around `base_discharge`. Identical parameters produce identical output.
pub fn sample_series(params: &SampleParams) -> Vec<TimeSeriesPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let n = params.points;

    // Draw all level noise first, then discharge noise, so the level curve
    // does not change when only the discharge parameters do.
    let level_noise: Vec<f64> = (0..n)
        .map(|_| draw(&mut rng) * params.level_noise)
        .collect();
    let discharge_noise: Vec<f64> = (0..n)
        .map(|_| draw(&mut rng) * params.discharge_noise)
        .collect();

    (0..n)
        .map(|i| {
            let idx = i as usize;
            let trend = if n > 1 {
                params.level_trend * i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            TimeSeriesPoint {
                elapsed_minutes: i,
                water_level_m: round_to(params.base_level + trend + level_noise[idx], 3),
                pump_discharge: round_to(params.base_discharge + discharge_noise[idx], 2),
            }
        })
        .collect()
}

/// Build a series from spreadsheet columns; the row index is the elapsed minute.
///
/// Rows where either value is missing are skipped but keep their index.
pub fn series_from_columns(
    water_levels: &[Option<f64>],
    discharges: &[Option<f64>],
) -> Vec<TimeSeriesPoint> {
    water_levels
        .iter()
        .zip(discharges)
        .enumerate()
        .filter_map(|(i, (level, discharge))| {
            Some(TimeSeriesPoint {
                elapsed_minutes: i as u32,
                water_level_m: (*level)?,
                pump_discharge: (*discharge)?,
            })
        })
        .collect()
}

/// Minimum and maximum water level in the series.
pub fn level_range(points: &[TimeSeriesPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|p| p.water_level_m)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn draw(rng: &mut ChaCha8Rng) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_series_is_reproducible() {
        let params = SampleParams::default();
        let a = serde_json::to_string(&sample_series(&params)).unwrap();
        let b = serde_json::to_string(&sample_series(&params)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_series_shape() {
        let series = sample_series(&SampleParams::default());
        assert_eq!(series.len(), 30);
        assert_eq!(series.first().unwrap().elapsed_minutes, 0);
        assert_eq!(series.last().unwrap().elapsed_minutes, 29);

        // 0.05 sd noise around 3.0..3.15 stays well inside this band
        for p in &series {
            assert!(p.water_level_m > 2.5 && p.water_level_m < 3.7, "{:?}", p);
            assert!(p.pump_discharge > 100.0 && p.pump_discharge < 140.0, "{:?}", p);
            assert_eq!(p.water_level_m, round_to(p.water_level_m, 3));
        }
    }

    #[test]
    fn test_sample_series_seed_changes_output() {
        let a = sample_series(&SampleParams::default());
        let b = sample_series(&SampleParams {
            seed: 7,
            ..SampleParams::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_noise_matches_parameters() {
        let params = SampleParams {
            points: 2000,
            level_trend: 0.0,
            ..SampleParams::default()
        };
        let series = sample_series(&params);
        let n = series.len() as f64;
        let mean = series.iter().map(|p| p.pump_discharge).sum::<f64>() / n;
        let sd = (series
            .iter()
            .map(|p| (p.pump_discharge - mean).powi(2))
            .sum::<f64>()
            / n)
            .sqrt();
        assert!((mean - 120.0).abs() < 0.3, "mean {}", mean);
        assert!((sd - 2.0).abs() < 0.2, "sd {}", sd);
    }

    #[test]
    fn test_noise_free_series_is_linear() {
        let params = SampleParams {
            points: 4,
            level_trend: 0.3,
            level_noise: 0.0,
            discharge_noise: 0.0,
            ..SampleParams::default()
        };
        let levels: Vec<f64> = sample_series(&params).iter().map(|p| p.water_level_m).collect();
        assert_eq!(levels, vec![3.0, 3.1, 3.2, 3.3]);
    }

    #[test]
    fn test_single_point_and_empty_series() {
        let one = SampleParams {
            points: 1,
            level_noise: 0.0,
            ..SampleParams::default()
        };
        assert_eq!(sample_series(&one)[0].water_level_m, 3.0);

        let none = SampleParams {
            points: 0,
            ..SampleParams::default()
        };
        assert!(sample_series(&none).is_empty());
    }

    #[test]
    fn test_series_from_columns_skips_gaps() {
        let levels = [Some(3.0), None, Some(3.2)];
        let discharges = [Some(100.0), Some(101.0), Some(102.0)];
        let series = series_from_columns(&levels, &discharges);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].elapsed_minutes, 2);
        assert_eq!(series[1].pump_discharge, 102.0);
    }

    #[test]
    fn test_level_range() {
        assert_eq!(level_range(&[]), None);
        let series = series_from_columns(
            &[Some(3.4), Some(2.9), Some(3.1)],
            &[Some(1.0), Some(1.0), Some(1.0)],
        );
        assert_eq!(level_range(&series), Some((2.9, 3.4)));
    }
}
