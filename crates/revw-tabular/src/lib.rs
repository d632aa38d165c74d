//! # revw-tabular
//!
//! Tabular I/O for Revw: reading review tables from CSV or spreadsheet files
//! into a [`revw_core::RawBatch`], and writing processed batches back out as
//! CSV or JSON.
//!
//! Spreadsheets (`xlsx`, `xlsm`, `xls`, `ods`) are read through `calamine`;
//! only the first worksheet is used. CSV is read and written with `csv`.

pub mod error;
pub mod export;
pub mod ingest;

pub use error::TabularError;
pub use export::{DEFAULT_FILE_NAME, export_header, export_to_path, write_csv, write_json};
pub use ingest::{SourceKind, read_csv, read_csv_from_reader, read_path, read_spreadsheet};
