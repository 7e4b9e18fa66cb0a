//! File-based data source.
//!
//! Reads a spreadsheet from disk on every load. Workbook formats go through
//! `calamine`; `.csv` goes through the `csv` crate.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, info};

use super::table::{parse_cell, SensorTable};
use super::{DataSource, SourceError};

/// Spreadsheet formats this source can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(FileFormat::Workbook),
            "" => Err(SourceError::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(SourceError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// A data source that reads sensor rows from a spreadsheet file.
///
/// Nothing is cached: each [`DataSource::load`] opens the file again, so a
/// re-render always sees the file's current contents.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    sheet: Option<String>,
    description: String,
    last_error: Option<String>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            sheet: None,
            description,
            last_error: None,
        }
    }

    /// Read a named worksheet instead of the first one.
    ///
    /// Ignored for CSV files.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        let sheet = sheet.into();
        self.description = format!("file: {} [{}]", self.path.display(), sheet);
        self.sheet = Some(sheet);
        self
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_csv(&self) -> Result<SensorTable, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(parse_cell).collect::<Vec<_>>());
        }

        Ok(SensorTable::new(headers, rows))
    }

    fn read_workbook(&self) -> Result<SensorTable, SourceError> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let range = match &self.sheet {
            Some(name) => workbook.worksheet_range(name)?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| SourceError::Parse("workbook has no worksheets".to_string()))??,
        };

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
            None => return Err(SourceError::Empty),
        };
        let rows: Vec<Vec<Option<f64>>> = rows
            .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
            .collect();

        Ok(SensorTable::new(headers, rows))
    }
}

/// Numeric value of a workbook cell.
fn cell_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_cell(s),
        _ => None,
    }
}

impl FileSource {
    fn read(&self) -> Result<SensorTable, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }

        let format = FileFormat::from_path(&self.path)?;
        debug!(path = %self.path.display(), ?format, "reading data file");

        let table = match format {
            FileFormat::Csv => self.read_csv(),
            FileFormat::Workbook => self.read_workbook(),
        }?;

        info!(
            path = %self.path.display(),
            rows = table.len(),
            columns = table.headers().len(),
            "loaded data file"
        );
        Ok(table)
    }
}

impl DataSource for FileSource {
    fn load(&mut self) -> Result<SensorTable, SourceError> {
        let result = self.read();
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
