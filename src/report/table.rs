// src/report/table.rs
//
// String view of a report, shared by the GUI table, the CLI printer and
// CSV/TSV export. Absent optional values render as empty cells.

use crate::config::options::ReportVariant;
use crate::specs::issues::IssueRow;

use super::{ Report, Totals };

/// 2-decimal display without trailing zeros: 5 → "5", 2.5 → "2.5", 1.255 → "1.25".
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { s!("0") } else { s!(s) }
}

pub fn headers(variant: ReportVariant) -> Vec<&'static str> {
    match variant {
        ReportVariant::StoryPoints => vec![
            "Assignee", "Link", "Summary", "Story Points (hours)", "Status",
        ],
        ReportVariant::TimeTracking => vec![
            "Assignee", "Link", "Summary", "Original Estimate (hours)",
            "Time Spent (hours)", "Work Ratio (%)", "Status",
        ],
    }
}

pub fn row_cells(row: &IssueRow, variant: ReportVariant) -> Vec<String> {
    let mut cells = Vec::with_capacity(7);
    cells.push(row.assignee.clone());
    cells.push(row.link.clone().unwrap_or_default());
    cells.push(row.summary.clone());
    cells.push(fmt_num(row.estimate_hours));
    if variant.tracks_time() {
        cells.push(opt_s!(row.time_spent_hours.map(fmt_num)));
        cells.push(opt_s!(row.work_ratio.map(fmt_num)));
    }
    cells.push(row.status.clone().unwrap_or_default());
    cells
}

pub fn rows(report: &Report) -> Vec<Vec<String>> {
    report.rows.iter().map(|r| row_cells(r, report.variant)).collect()
}

/// Label/value pairs for the totals section. Fields the variant does not
/// track are omitted; a skipped ratio shows as "n/a".
pub fn totals_cells(totals: &Totals, variant: ReportVariant) -> Vec<(&'static str, String)> {
    let mut out = vec![("Total Estimate (hours)", fmt_num(totals.total_estimate_hours))];
    if variant.tracks_time() {
        out.push(("Total Time Spent (hours)", opt_s!(totals.total_time_spent_hours.map(fmt_num))));
        out.push((
            "Average Work Ratio (%)",
            totals.average_work_ratio.map(fmt_num).unwrap_or_else(|| s!("n/a")),
        ));
    }
    if let Some(t) = totals.target {
        out.push(("Target (hours)", fmt_num(t)));
    }
    if let Some(n) = totals.needed_hours {
        out.push(("Needed (hours)", fmt_num(n)));
    }
    out
}
