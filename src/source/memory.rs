//! In-memory data source.
//!
//! Serves a [`SensorTable`] that was built elsewhere, e.g. by a caller that
//! already holds readings from its own logger, or by tests.

use super::{DataSource, SensorTable, SourceError};

/// A data source backed by a table held in memory.
///
/// # Example
///
/// ```
/// use pumpwatch::{DataSource, MemorySource, SensorTable};
///
/// let table = SensorTable::from_text(["水位", "揚水量"], vec![vec!["3.1", "120"]]);
/// let mut source = MemorySource::new(table, "logger");
/// assert_eq!(source.load().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct MemorySource {
    table: Option<SensorTable>,
    description: String,
    last_error: Option<String>,
}

impl MemorySource {
    /// Create a source that returns `table` on every load.
    pub fn new(table: SensorTable, source_description: &str) -> Self {
        Self {
            table: Some(table),
            description: format!("memory: {}", source_description),
            last_error: None,
        }
    }

    /// Create a source with no data; every load fails with [`SourceError::Empty`].
    pub fn empty(source_description: &str) -> Self {
        Self {
            table: None,
            description: format!("memory: {}", source_description),
            last_error: None,
        }
    }
}

impl DataSource for MemorySource {
    fn load(&mut self) -> Result<SensorTable, SourceError> {
        let result = self.table.clone().ok_or(SourceError::Empty);
        self.last_error = result.as_ref().err().map(ToString::to_string);
        result
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
