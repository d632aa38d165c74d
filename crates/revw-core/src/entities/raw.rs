use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One source row: column name → raw cell.
///
/// A column missing from the map reads as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RawReview {
    pub cells: BTreeMap<String, CellValue>,
}

impl RawReview {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell insertion.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawReview {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// A whole upload: header order plus rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RawBatch {
    /// Column names in source header order.
    pub columns: Vec<String>,
    pub rows: Vec<RawReview>,
}

impl RawBatch {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<RawReview>) -> Self {
        Self { columns, rows }
    }

    /// Build a batch whose header is the union of the rows' columns, in
    /// first-seen order.
    #[must_use]
    pub fn from_rows(rows: Vec<RawReview>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for column in row.cells.keys() {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }
        Self { columns, rows }
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
