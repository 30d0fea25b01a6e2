// rdsq/src/presenter.rs
//
// Turns an Outcome into terminal text. Formatting is pure (String in, String
// out) so the same outcome always renders the same way.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use rdsq_core::domain::{CellValue, Outcome, ResultEnvelope};

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";
const ROW_MARKER: &str = "  • ";
const HEADER_INDENT: &str = "    ";

pub fn render(outcome: &Outcome, out: &mut dyn Write) -> io::Result<()> {
    let text = match outcome {
        Outcome::Tabular(envelope) => format_table(envelope),
        Outcome::Notice(message) => format_notice(message),
    };
    out.write_all(text.as_bytes())
}

pub fn format_notice(message: &str) -> String {
    format!("{}\n", message)
}

pub fn format_table(envelope: &ResultEnvelope) -> String {
    let columns = envelope.column_names();
    let rows: Vec<Vec<String>> = envelope
        .records
        .iter()
        .map(|record| record.iter().map(CellValue::to_string).collect())
        .collect();
    let widths = column_widths(&columns, &rows);

    let mut text = String::new();
    let count = rows.len();
    text.push_str(&format!(
        "📊 {} {} returned\n",
        count,
        if count == 1 { "row" } else { "rows" }
    ));

    if !columns.is_empty() {
        push_line(&mut text, HEADER_INDENT, &pad_all(&columns, &widths), COLUMN_SEPARATOR);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut text, HEADER_INDENT, &rule, RULE_SEPARATOR);
    }

    for row in &rows {
        // Cells missing from a short row still occupy their column
        let cells: Vec<&str> = (0..widths.len().max(row.len()))
            .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        push_line(&mut text, ROW_MARKER, &pad_all(&cells, &widths), COLUMN_SEPARATOR);
    }

    text
}

/// Widest value per column index, header included.
fn column_widths(columns: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let arity = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(columns.len()))
        .max()
        .unwrap_or(0);

    (0..arity)
        .map(|i| {
            let header = columns.get(i).map(|c| display_width(c)).unwrap_or(0);
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|v| display_width(v))
                .chain(std::iter::once(header))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Terminal columns taken by `value` (CJK and emoji count double).
fn display_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// Pads every cell but the last to its column width. The last cell is left
/// as-is so the line carries no padding past the real value.
fn pad_all<S: AsRef<str>>(values: &[S], widths: &[usize]) -> Vec<String> {
    let last = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = v.as_ref();
            if i == last {
                return v.to_string();
            }
            let width = widths.get(i).copied().unwrap_or(0);
            let padding = width.saturating_sub(display_width(v));
            format!("{}{}", v, " ".repeat(padding))
        })
        .collect()
}

fn push_line(text: &mut String, prefix: &str, cells: &[String], separator: &str) {
    text.push_str(prefix);
    text.push_str(&cells.join(separator));
    text.push('\n');
}
