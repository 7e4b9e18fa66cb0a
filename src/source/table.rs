//! Tabular sensor data shared by every spreadsheet reader.
//!
//! Readers normalise their input into a [`SensorTable`]: one header row and
//! any number of data rows of optional numbers. Column lookup and the
//! card/series extraction live here so every file format behaves the same.

use std::collections::BTreeMap;

use tracing::debug;

use super::SourceError;
use crate::data::{series_from_columns, Metric, MetricKind, TimeSeriesPoint};

/// Header name overrides, keyed by metric.
///
/// A metric without an override is matched against its built-in aliases.
pub type ColumnOverrides = BTreeMap<MetricKind, String>;

/// A header row plus time-ordered rows of numeric cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

impl SensorTable {
    /// Build a table, padding short rows and trimming trailing blank rows.
    ///
    /// Blank rows between readings are kept so every later row stays at its
    /// elapsed minute.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<f64>>>) -> Self {
        let width = headers.len();
        let mut rows: Vec<Vec<Option<f64>>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        while rows.last().is_some_and(|row| row.iter().all(Option::is_none)) {
            rows.pop();
        }
        Self { headers, rows }
    }

    /// Build a table from raw text cells, parsing each as a number.
    pub fn from_text<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers: Vec<String> =
            headers.into_iter().map(|h| h.as_ref().trim().to_string()).collect();
        let rows: Vec<Vec<Option<f64>>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| parse_cell(c.as_ref())).collect::<Vec<_>>())
            .collect();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows, including blank rows between readings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the header index for a metric.
    pub fn column_index(
        &self,
        kind: MetricKind,
        overrides: &ColumnOverrides,
    ) -> Result<usize, SourceError> {
        let found = match overrides.get(&kind) {
            Some(name) => self
                .headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name.trim())),
            None => self
                .headers
                .iter()
                .position(|h| MetricKind::from_name(h) == Some(kind)),
        };

        match found {
            Some(idx) => {
                debug!(metric = kind.key(), column = %self.headers[idx], "resolved column");
                Ok(idx)
            }
            None => Err(SourceError::MissingColumn(
                overrides
                    .get(&kind)
                    .cloned()
                    .unwrap_or_else(|| kind.name_en().to_lowercase()),
            )),
        }
    }

    /// All values of a metric's column, in row order.
    pub fn column(
        &self,
        kind: MetricKind,
        overrides: &ColumnOverrides,
    ) -> Result<Vec<Option<f64>>, SourceError> {
        let idx = self.column_index(kind, overrides)?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// One card per metric from the last data row.
    ///
    /// Trailing blank rows are trimmed on construction, so the last row always
    /// carries at least one reading.
    /// Every metric column must be present. An empty cell reads as 0.
    pub fn latest_metrics(
        &self,
        overrides: &ColumnOverrides,
        precision: usize,
    ) -> Result<Vec<Metric>, SourceError> {
        let indices = MetricKind::ALL
            .iter()
            .map(|&kind| self.column_index(kind, overrides).map(|idx| (kind, idx)))
            .collect::<Result<Vec<_>, SourceError>>()?;

        let last = self.rows.last().ok_or(SourceError::Empty)?;

        Ok(indices
            .into_iter()
            .map(|(kind, idx)| Metric::from_reading(kind, last[idx].unwrap_or(0.0), precision))
            .collect())
    }

    /// Water level and discharge for every row; the row index is elapsed minutes.
    pub fn series(&self, overrides: &ColumnOverrides) -> Result<Vec<TimeSeriesPoint>, SourceError> {
        let levels = self.column(MetricKind::WaterLevel, overrides)?;
        let discharges = self.column(MetricKind::PumpDischarge, overrides)?;
        if self.rows.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(series_from_columns(&levels, &discharges))
    }
}

/// Parse a text cell as a number. Blank or non-numeric cells are `None`.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    let cell = cell.strip_suffix('%').unwrap_or(cell).trim_end();
    cell.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}
