// src/csv.rs
use std::io::{ self, Write };

use crate::report::{ table, Report };

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Totals as rows aligned to the issue table: the label sits in the first
/// column and the value under the matching numeric column where there is one,
/// otherwise under the estimate column.
pub fn totals_rows(report: &Report) -> Vec<Vec<String>> {
    let headers = table::headers(report.variant);
    let width = headers.len();
    let estimate_col = 3;

    table::totals_cells(&report.totals, report.variant)
        .into_iter()
        .map(|(label, value)| {
            let col = match label {
                "Total Time Spent (hours)" => headers.iter().position(|h| h.starts_with("Time Spent")),
                "Average Work Ratio (%)" => headers.iter().position(|h| h.starts_with("Work Ratio")),
                _ => None,
            }
            .unwrap_or(estimate_col);
            let mut row = vec![s!(); width];
            row[0] = s!(label);
            row[col] = value;
            row
        })
        .collect()
}

/// Whole report (Copy/Export): optional header line, one line per issue, then
/// the totals lines.
pub fn report_to_string(report: &Report, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &table::headers(report.variant), sep);
    }
    for r in table::rows(report) {
        let _ = write_row(&mut buf, &r, sep);
    }
    for r in totals_rows(report) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
