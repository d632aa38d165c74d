//! Writing a processed batch back out as CSV or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use revw_core::columns::{AUTOMATED_FEEDBACK, DERIVED, SENTIMENT};
use revw_core::{ClassifiedReview, ColumnMap, ExportFormat, PipelineOutput};

use crate::error::TabularError;

/// Default file name for exported datasets.
pub const DEFAULT_FILE_NAME: &str = "processed_professor_reviews.csv";

/// Header of the exported CSV: source columns minus any stale derived
/// columns, then `sentiment` and `automated_feedback`.
#[must_use]
pub fn export_header(output: &PipelineOutput) -> Vec<String> {
    output
        .columns
        .iter()
        .filter(|name| !DERIVED.contains(&name.as_str()))
        .cloned()
        .chain(DERIVED.iter().map(|name| (*name).to_string()))
        .collect()
}

/// Write the enriched dataset as CSV.
///
/// Required columns carry their normalized values, passthrough columns their
/// original cells. Ratings are written as integers.
///
/// # Errors
///
/// Returns [`TabularError::Csv`] if a record cannot be written.
pub fn write_csv<W: Write>(
    writer: W,
    output: &PipelineOutput,
    columns: &ColumnMap,
) -> Result<(), TabularError> {
    let header = export_header(output);
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(&header)?;

    for review in &output.reviews {
        let record = header.iter().map(|name| cell_for(review, name, columns));
        writer.write_record(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the whole pipeline output (header, rows, summary) as pretty JSON.
///
/// # Errors
///
/// Returns [`TabularError::Json`] if serialization or the write fails.
pub fn write_json<W: Write>(writer: W, output: &PipelineOutput) -> Result<(), TabularError> {
    serde_json::to_writer_pretty(writer, output)?;
    Ok(())
}

/// Export to a file in the given format, replacing any existing file.
///
/// # Errors
///
/// Fails if the file cannot be created or the data cannot be written.
pub fn export_to_path(
    path: &Path,
    output: &PipelineOutput,
    columns: &ColumnMap,
    format: ExportFormat,
) -> Result<(), TabularError> {
    let file = File::create(path).map_err(|e| TabularError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => write_csv(&mut writer, output, columns)?,
        ExportFormat::Json => write_json(&mut writer, output)?,
    }
    writer.flush().map_err(|e| TabularError::io(path, e))?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        rows = output.len(),
        "tabular: exported dataset"
    );
    Ok(())
}

fn cell_for(review: &ClassifiedReview, name: &str, columns: &ColumnMap) -> String {
    let normalized = &review.review;
    if name == columns.take_again {
        normalized.take_again.clone()
    } else if name == columns.comments {
        normalized.comment.clone()
    } else if name == columns.difficulty {
        normalized.difficulty.to_string()
    } else if name == columns.overall_quality {
        normalized.overall_quality.to_string()
    } else if name == SENTIMENT {
        review.sentiment.to_string()
    } else if name == AUTOMATED_FEEDBACK {
        review.feedback.clone()
    } else {
        normalized
            .passthrough
            .get(name)
            .map(revw_core::CellValue::render)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use revw_core::{BatchSummary, CellValue, NormalizedReview, Sentiment, SentimentCounts};

    use super::*;

    fn output(columns: &[&str]) -> PipelineOutput {
        let review = ClassifiedReview {
            review: NormalizedReview {
                take_again: "Yes".into(),
                comment: "Great, clear lectures".into(),
                difficulty: 3,
                overall_quality: 4,
                passthrough: BTreeMap::from([
                    ("professor".to_string(), CellValue::Text("Dr. Lee".into())),
                    ("year".to_string(), CellValue::Number(2021.0)),
                ]),
            },
            polarity: 0.6,
            sentiment: Sentiment::Positive,
            feedback: "thanks".into(),
        };
        PipelineOutput {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            reviews: vec![review],
            summary: BatchSummary {
                row_count: 1,
                sentiment_counts: SentimentCounts {
                    positive: 1,
                    neutral: 0,
                    negative: 0,
                },
                avg_difficulty: 3.0,
                avg_overall_quality: 4.0,
                take_again_counts: BTreeMap::from([("Yes".to_string(), 1)]),
            },
        }
    }

    #[test]
    fn csv_follows_source_header_then_derived_columns() {
        let out = output(&[
            "professor",
            "take again",
            "comments",
            "difficulty",
            "overall quality",
            "year",
        ]);
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &out, &ColumnMap::default()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "professor,take again,comments,difficulty,overall quality,year,sentiment,automated_feedback\n\
             Dr. Lee,Yes,\"Great, clear lectures\",3,4,2021,Positive,thanks\n"
        );
    }

    #[test]
    fn stale_derived_columns_are_not_duplicated() {
        let out = output(&[
            "take again",
            "sentiment",
            "comments",
            "difficulty",
            "overall quality",
            "automated_feedback",
        ]);
        assert_eq!(
            export_header(&out),
            vec![
                "take again",
                "comments",
                "difficulty",
                "overall quality",
                "sentiment",
                "automated_feedback"
            ]
        );
    }

    #[test]
    fn json_export_is_the_full_output() {
        let out = output(&["take again", "comments", "difficulty", "overall quality"]);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &out).unwrap();

        let parsed: PipelineOutput = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, out);
    }
}
