//! Read one numeric column of a CSV file as a sample sequence.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column {0} not found")]
    MissingColumn(String),

    #[error("row {row}: '{value}' is not a number")]
    NonNumeric { row: usize, value: String },

    #[error("no samples found")]
    Empty,
}

/// Column selector: header name or zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Index(usize),
    Name(String),
}

impl Default for Column {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl FromStr for Column {
    type Err = std::convert::Infallible;

    /// Digits select by position, anything else by header name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Where in the CSV the samples live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSource {
    pub column: Column,
    pub has_headers: bool,
}

impl Default for SampleSource {
    fn default() -> Self {
        Self {
            column: Column::default(),
            has_headers: true,
        }
    }
}

impl SampleSource {
    pub fn column(column: Column) -> Self {
        Self {
            column,
            ..Self::default()
        }
    }

    pub fn headerless(mut self) -> Self {
        self.has_headers = false;
        self
    }
}

/// Read samples from any CSV reader.
///
/// Cells are trimmed before parsing. Row numbers in errors count data rows
/// from 1, excluding the header.
pub fn read_samples<R: Read>(reader: R, source: &SampleSource) -> Result<Vec<f64>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(source.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let column_index = match &source.column {
        Column::Index(i) => *i,
        Column::Name(name) => {
            if !source.has_headers {
                return Err(LoadError::MissingColumn(source.column.to_string()));
            }
            rdr.headers()?
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(source.column.to_string()))?
        }
    };

    let mut samples = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let field = record
            .get(column_index)
            .ok_or_else(|| LoadError::MissingColumn(source.column.to_string()))?;
        let value = field.parse::<f64>().map_err(|_| LoadError::NonNumeric {
            row,
            value: field.to_string(),
        })?;
        samples.push(value);
    }

    if samples.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(samples)
}

/// Read samples from a CSV file on disk.
pub fn load_samples(path: &Path, source: &SampleSource) -> Result<Vec<f64>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = read_samples(std::io::BufReader::new(file), source)?;
    log::debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
