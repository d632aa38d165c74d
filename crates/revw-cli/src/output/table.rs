#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned plain-text table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            pad(&text, display_width(&text), *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(&single_line(value), *width);
                let numeric = looks_numeric(&truncated);
                let visible = display_width(&truncated);
                let cell = if options.color {
                    colorize_sentiment(&truncated)
                } else {
                    truncated
                };
                pad(&cell, visible, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn single_line(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, visible: usize, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(visible));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap a sentiment label in its ANSI color; other values pass through.
fn colorize_sentiment(value: &str) -> String {
    let code = match value {
        "Positive" => "32",
        "Neutral" => "33",
        "Negative" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
pub(crate) fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_and_numbers_right_align() {
        let headers = ["row", "sentiment"];
        let rows = vec![
            vec!["0".to_string(), "Neutral".to_string()],
            vec!["12".to_string(), "Negative".to_string()],
        ];
        let table = render_table(&headers, &rows, PLAIN);
        assert_eq!(
            table,
            "row     sentiment\n\
             -----------------\n     \
             0  Neutral\n    \
             12  Negative"
        );
    }

    #[test]
    fn sentiment_labels_are_colored() {
        let headers = ["sentiment", "comment"];
        let rows = vec![
            vec!["Positive".to_string(), "Positive vibes".to_string()],
            vec!["Negative".to_string(), "-".to_string()],
        ];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mPositive"));
        assert!(table.contains("\u{1b}[31mNegative"));
        assert!(!table.contains("\u{1b}[32mPositive vibes"));
        assert_eq!(
            strip_ansi(&table),
            render_table(&headers, &rows, PLAIN)
        );
    }

    #[test]
    fn wide_tables_shrink_to_fit() {
        let headers = ["comment"];
        let rows = vec![vec!["a very long comment about the midterm exam".to_string()]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let last = table.lines().last().unwrap_or_default();
        assert_eq!(last.chars().count(), 20);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn multiline_cells_are_flattened() {
        let rows = vec![vec!["line one\nline two".to_string()]];
        let table = render_table(&["comment"], &rows, PLAIN);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("line one line two"));
    }
}
