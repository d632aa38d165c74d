//! Reading review tables into a [`RawBatch`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::{ReaderBuilder, StringRecord};
use revw_core::{CellValue, RawBatch, RawReview};

use crate::error::TabularError;

/// Source file kinds recognised by [`read_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Spreadsheet,
}

impl SourceKind {
    /// Detect the source kind from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`TabularError::UnsupportedFormat`] for anything other than
    /// `csv`, `xlsx`, `xlsm`, `xls`, or `ods`.
    pub fn from_path(path: &Path) -> Result<Self, TabularError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Spreadsheet),
            _ => Err(TabularError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Read a CSV or spreadsheet file, dispatching on its extension.
///
/// # Errors
///
/// Fails if the extension is unsupported, the file cannot be opened or
/// parsed, or the header row is missing or repeats a column name.
pub fn read_path(path: &Path) -> Result<RawBatch, TabularError> {
    let batch = match SourceKind::from_path(path)? {
        SourceKind::Csv => read_csv(path)?,
        SourceKind::Spreadsheet => read_spreadsheet(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        rows = batch.len(),
        columns = batch.columns.len(),
        "tabular: read source"
    );
    Ok(batch)
}

/// Read a CSV file with a header row.
///
/// # Errors
///
/// See [`read_csv_from_reader`].
pub fn read_csv(path: &Path) -> Result<RawBatch, TabularError> {
    let file = File::open(path).map_err(|e| TabularError::io(path, e))?;
    read_csv_from_reader(file)
}

/// Read CSV data with a header row from any reader.
///
/// Every cell is kept as text; blank cells become [`CellValue::Empty`].
/// Short rows are padded with empty cells and surplus cells are ignored.
///
/// # Errors
///
/// Returns [`TabularError::Csv`] on malformed CSV,
/// [`TabularError::MissingHeader`] if there is no header row, and
/// [`TabularError::DuplicateColumn`] if a header name repeats.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<RawBatch, TabularError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(TabularError::MissingHeader);
    }
    let columns = header_names(headers.iter().map(str::to_string))?;

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let row: RawReview = columns
            .iter()
            .enumerate()
            .map(|(index, column)| (column.clone(), text_cell(record.get(index).unwrap_or(""))))
            .collect();
        rows.push(row);
    }

    Ok(RawBatch::new(columns, rows))
}

/// Read the first worksheet of an `xlsx`, `xlsm`, `xls`, or `ods` workbook.
///
/// The first row is the header. Numeric cells stay numeric, error cells
/// become [`CellValue::Empty`], and fully empty rows are skipped.
///
/// # Errors
///
/// Fails if the workbook cannot be opened, has no worksheets, or its header
/// is missing or repeats a column name.
pub fn read_spreadsheet(path: &Path) -> Result<RawBatch, TabularError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TabularError::NoWorksheet {
            path: path.to_path_buf(),
        })??;

    let mut sheet_rows = range.rows();
    let header = sheet_rows.next().ok_or(TabularError::MissingHeader)?;
    let columns = header_names(header.iter().enumerate().map(|(index, cell)| {
        let name = cell.to_string();
        if name.trim().is_empty() {
            format!("Unnamed: {index}")
        } else {
            name
        }
    }))?;

    let rows = sheet_rows
        .filter(|cells| !cells.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|cells| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let cell = cells.get(index).map_or(CellValue::Empty, sheet_cell);
                    (column.clone(), cell)
                })
                .collect::<RawReview>()
        })
        .collect();

    Ok(RawBatch::new(columns, rows))
}

fn header_names(names: impl Iterator<Item = String>) -> Result<Vec<String>, TabularError> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for name in names {
        if !seen.insert(name.clone()) {
            return Err(TabularError::DuplicateColumn { column: name });
        }
        columns.push(name);
    }
    Ok(columns)
}

fn text_cell(value: &str) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value.to_string())
    }
}

#[allow(clippy::cast_precision_loss)]
fn sheet_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::String(text) => text_cell(text),
        other => CellValue::Text(other.to_string()),
    }
}
