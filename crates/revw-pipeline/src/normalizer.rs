//! Record normalization: raw rows → `NormalizedReview`.
//!
//! Column-level work (required-column checks, numeric parsing, fill means)
//! happens once in [`Normalizer::prepare`]; after that every row normalizes
//! independently through [`Normalizer::row`], so rows can be processed in any
//! order or in parallel.

use std::collections::BTreeMap;

use revw_core::columns::PLACEHOLDER_COMMENT;
use revw_core::{CellValue, ColumnMap, NormalizedReview, PipelineError, RawBatch, RawReview};

/// Column-level state shared by every row of one batch.
#[derive(Debug)]
pub struct Normalizer<'a> {
    columns: &'a ColumnMap,
    passthrough: Vec<&'a str>,
    difficulty: NumericColumn,
    overall_quality: NumericColumn,
}

/// Parsed values of one numeric column plus its fill value.
#[derive(Debug)]
struct NumericColumn {
    values: Vec<Option<f64>>,
    fill: f64,
}

impl NumericColumn {
    /// Parse every cell and compute the mean of the present values.
    fn read(batch: &RawBatch, column: &str) -> Result<Self, PipelineError> {
        let values = batch
            .rows
            .iter()
            .enumerate()
            .map(|(row, raw)| {
                parse_numeric(raw.get(column))
                    .map_err(|reason| PipelineError::malformed(row, column, reason))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let fill = mean(values.iter().flatten().copied()).ok_or_else(|| {
            PipelineError::InsufficientData {
                column: column.to_string(),
            }
        })?;

        Ok(Self { values, fill })
    }

    fn value_at(&self, row: usize) -> i64 {
        let value = self.values.get(row).copied().flatten().unwrap_or(self.fill);
        truncate(value)
    }
}

impl<'a> Normalizer<'a> {
    /// Validate the batch header and compute the numeric fill values.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyBatch`] if the batch has no rows.
    /// - [`PipelineError::MissingColumn`] if a required column is absent.
    /// - [`PipelineError::MalformedCell`] if a numeric cell holds non-numeric text.
    /// - [`PipelineError::InsufficientData`] if a numeric column has no values.
    pub fn prepare(batch: &'a RawBatch, columns: &'a ColumnMap) -> Result<Self, PipelineError> {
        if batch.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }

        for required in columns.required() {
            if !batch.has_column(required) {
                return Err(PipelineError::MissingColumn {
                    column: required.to_string(),
                });
            }
        }

        let difficulty = NumericColumn::read(batch, &columns.difficulty)?;
        let overall_quality = NumericColumn::read(batch, &columns.overall_quality)?;

        tracing::debug!(
            rows = batch.len(),
            difficulty_fill = difficulty.fill,
            overall_quality_fill = overall_quality.fill,
            "normalizer: computed fill values"
        );

        let passthrough = batch
            .columns
            .iter()
            .map(String::as_str)
            .filter(|name| !columns.is_managed(name))
            .collect();

        Ok(Self {
            columns,
            passthrough,
            difficulty,
            overall_quality,
        })
    }

    /// Fill value used for missing `difficulty` cells, before truncation.
    #[must_use]
    pub const fn difficulty_fill(&self) -> f64 {
        self.difficulty.fill
    }

    /// Fill value used for missing `overall quality` cells, before truncation.
    #[must_use]
    pub const fn overall_quality_fill(&self) -> f64 {
        self.overall_quality.fill
    }

    /// Normalize the row at position `row` of the prepared batch.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MalformedCell`] if the take-again cell is
    /// blank or not text.
    pub fn row(&self, row: usize, raw: &RawReview) -> Result<NormalizedReview, PipelineError> {
        let take_again_column = self.columns.take_again.as_str();
        let take_again = match raw.get(take_again_column) {
            CellValue::Text(text) if !text.trim().is_empty() => capitalize(text),
            CellValue::Number(value) => {
                return Err(PipelineError::malformed(
                    row,
                    take_again_column,
                    format!("expected text, got number {value}"),
                ));
            }
            _ => {
                return Err(PipelineError::malformed(
                    row,
                    take_again_column,
                    "missing value",
                ));
            }
        };

        let cell = raw.get(&self.columns.comments);
        let comment = if cell.is_blank() {
            PLACEHOLDER_COMMENT.to_string()
        } else {
            cell.render()
        };

        let passthrough: BTreeMap<String, CellValue> = self
            .passthrough
            .iter()
            .map(|name| ((*name).to_string(), raw.get(name).clone()))
            .collect();

        Ok(NormalizedReview {
            take_again,
            comment,
            difficulty: self.difficulty.value_at(row),
            overall_quality: self.overall_quality.value_at(row),
            passthrough,
        })
    }
}

/// Normalize a whole batch, preserving row order.
///
/// # Errors
///
/// Fails with the first error in row order; see [`Normalizer::prepare`] and
/// [`Normalizer::row`].
pub fn normalize(
    batch: &RawBatch,
    columns: &ColumnMap,
) -> Result<Vec<NormalizedReview>, PipelineError> {
    let normalizer = Normalizer::prepare(batch, columns)?;
    batch
        .rows
        .iter()
        .enumerate()
        .map(|(row, raw)| normalizer.row(row, raw))
        .collect()
}

/// Upper-case the first character and lower-case the rest (`"nO"` → `"No"`).
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Parse a numeric cell. Blank cells are missing (`Ok(None)`).
fn parse_numeric(cell: &CellValue) -> Result<Option<f64>, String> {
    let value = match cell {
        CellValue::Empty => return Ok(None),
        CellValue::Number(value) => *value,
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got {text:?}"))?
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(format!("expected a finite number, got {value}"))
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

/// Truncate toward zero, matching an integer cast (`2.9` → `2`, `-1.5` → `-1`).
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
