//! Where raw egg rows come from.
//!
//! A [`RecordSource`] returns every row of the sheet, header included.
//! [`load_records`] turns that into typed records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::eggs::record::{EggRecord, RawRow};
use crate::error::SourceError;

/// A supplier of spreadsheet rows.
pub trait RecordSource {
    /// Returns all rows, header row first.
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError>;

    /// Short description for logs.
    fn describe(&self) -> String {
        "in-memory rows".to_string()
    }
}

impl RecordSource for Vec<RawRow> {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        Ok(self.clone())
    }
}

/// Fetches rows from `source` and converts them to records.
///
/// Zero rows (not even a header) means the sheet is unavailable. A lone
/// header row is an empty, successful result.
pub fn load_records(source: &dyn RecordSource) -> Result<Vec<EggRecord>, SourceError> {
    let rows = source.fetch_rows().map_err(|err| {
        warn!(source = %source.describe(), error = %err, "failed to fetch egg rows");
        err
    })?;

    if rows.is_empty() {
        warn!(source = %source.describe(), "sheet returned no rows");
        return Err(SourceError::NoData);
    }

    let records = EggRecord::from_rows(&rows[1..]);
    debug!(
        source = %source.describe(),
        rows = rows.len(),
        records = records.len(),
        "loaded egg records"
    );
    Ok(records)
}

/// A CSV export of the sheet.
#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSheet {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| SourceError::Csv {
                path: self.path.clone(),
                source,
            })?;
            rows.push(record.iter().map(|cell| Some(cell.to_string())).collect());
        }
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

/// The JSON body of a Sheets `values.get` response saved to a file.
#[derive(Debug, Clone)]
pub struct SheetValues {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SheetValues {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses a `values.get` body into rows.
    pub fn parse(body: &str) -> Result<Vec<RawRow>, serde_json::Error> {
        let range: ValueRange = serde_json::from_str(body)?;
        if let Some(name) = &range.range {
            debug!(range = %name, "parsed sheet values");
        }

        let rows: Vec<RawRow> = range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();

        let by_columns = range
            .major_dimension
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case("COLUMNS"));
        Ok(if by_columns { transpose(rows) } else { rows })
    }
}

impl RecordSource for SheetValues {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let body = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        SheetValues::parse(&body).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("sheet-values:{}", self.path.display())
    }
}

fn cell_text(cell: serde_json::Value) -> Option<String> {
    match cell {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn transpose(columns: Vec<RawRow>) -> Vec<RawRow> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|i| {
            columns
                .iter()
                .map(|column| column.get(i).cloned().flatten())
                .collect()
        })
        .collect()
}

/// Picks a reader by file extension: `.json` is sheet values, anything else CSV.
pub fn source_for_path(path: &Path) -> Box<dyn RecordSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    info!(path = %path.display(), json = is_json, "selected egg record source");
    if is_json {
        Box::new(SheetValues::new(path))
    } else {
        Box::new(CsvSheet::new(path))
    }
}
