//! Error types for data sources.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make a data source unavailable for the current render.
///
/// The `Display` text is shown on the page as-is.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file does not exist.
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// The file was read but its contents could not be parsed.
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(String),

    /// The file extension is not a spreadsheet format we can read.
    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The sheet has a header but no data rows.
    #[error("Spreadsheet has no data rows")]
    Empty,
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

impl From<calamine::Error> for SourceError {
    fn from(err: calamine::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}
