//! Data source abstraction for loading sensor readings.
//!
//! This module provides a trait-based abstraction for reading pumping-test
//! data from various sources (spreadsheet files, in-memory tables).

mod error;
mod file;
mod memory;
mod table;

pub use error::SourceError;
pub use file::{FileFormat, FileSource};
pub use memory::MemorySource;
pub use table::{parse_cell, ColumnOverrides, SensorTable};

use std::fmt::Debug;

/// Trait for loading sensor readings from various sources.
///
/// A render calls [`load`](DataSource::load) exactly once. Implementations
/// must not cache between calls; every load reflects the source's current
/// contents.
///
/// # Example
///
/// ```
/// use pumpwatch::{DataSource, FileSource};
///
/// let mut source = FileSource::new("pumping_test.xlsx");
/// match source.load() {
///     Ok(table) => println!("Got {} rows", table.len()),
///     Err(e) => println!("{} unavailable: {}", source.description(), e),
/// }
/// ```
pub trait DataSource: Debug {
    /// Read the full table.
    fn load(&mut self) -> Result<SensorTable, SourceError>;

    /// Returns a human-readable description of the source.
    ///
    /// Shown under the page title.
    fn description(&self) -> &str;

    /// Returns the message of the last failed load, if the last load failed.
    ///
    /// A successful load clears it.
    fn error(&self) -> Option<&str>;
}
