// src/specs/issues.rs
//
// JIRA "Printable"/HTML issue-navigator export.
// Layout (per issue):
//   <tr class="issuerow" ...>
//     <td class="issuekey"><a href="https://…/browse/ABC-12">ABC-12</a></td>
//     <td class="summary"><p>Summary text <a …>nested</a></p></td>
//     <td class="assignee">Jane Doe</td>
//     <td class="customfield_10028">5</td>   (or time tracking cells)
//     <td class="status"><span …>In Progress</span></td>
//   </tr>
// Missing cells never reject a row; they just leave the field empty.

use crate::config::options::ReportOptions;
use crate::core::html::{ self, Markup };
use crate::core::sanitize::{ non_empty, parse_int };
use crate::report::round2;

use super::fields::{ field_set, resolve };

pub const ROW_CLASS: &str = "issuerow";
const ASSIGNEE: &str = "assignee";
const SUMMARY: &str = "summary";
const STATUS: &str = "status";
const ISSUE_KEY: &str = "issuekey";
const WORK_RATIO: &str = "workratio";

/// One exported issue. Built once per parse; never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct IssueRow {
    pub assignee: String,
    pub summary: String,
    pub link: Option<String>,
    /// Rounded to 2 decimals.
    pub estimate_hours: f64,
    /// Only for variants with time tracking; absent cells resolve to 0.
    pub time_spent_hours: Option<f64>,
    /// Percent as exported by JIRA.
    pub work_ratio: Option<f64>,
    pub status: Option<String>,
}

/// Every issue row in the document, in document order.
pub fn extract_rows(doc: &str, opts: &ReportOptions) -> Vec<IssueRow> {
    let m = Markup::new(doc);
    m.find_all("tr", ROW_CLASS)
        .iter()
        .map(|b| extract_row(b.outer(doc), opts))
        .collect()
}

/// Pull typed fields out of one `<tr class="issuerow">` block.
pub fn extract_row(row_html: &str, opts: &ReportOptions) -> IssueRow {
    let row = Markup::new(row_html);
    let fields = field_set(opts.variant);

    let estimate: Vec<Option<i64>> = fields.estimate.iter().map(|f| cell_int(&row, f)).collect();
    let estimate_hours = round2(fields.estimate_unit.to_hours(resolve(&estimate, opts.zero_policy)));

    let time_spent_hours = if opts.variant.tracks_time() {
        let spent: Vec<Option<i64>> = fields.time_spent.iter().map(|f| cell_int(&row, f)).collect();
        Some(resolve(&spent, opts.zero_policy) as f64 / 3600.0)
    } else {
        None
    };

    let work_ratio = if opts.variant.tracks_time() {
        cell_int(&row, WORK_RATIO).and_then(work_ratio_percent)
    } else {
        None
    };

    IssueRow {
        assignee: cell_text(&row, ASSIGNEE).unwrap_or_default(),
        summary: summary_text(&row),
        link: issue_link(&row),
        estimate_hours,
        time_spent_hours,
        work_ratio,
        status: cell_text(&row, STATUS).and_then(non_empty),
    }
}

/* ---------- helpers ---------- */

fn cell_text(row: &Markup, class: &str) -> Option<String> {
    row.find_first("td", Some(class))
        .map(|b| html::text(b.inner(row.src())))
}

fn cell_int(row: &Markup, class: &str) -> Option<i64> {
    cell_text(row, class).and_then(|t| parse_int(&t))
}

/// JIRA writes -1 when there is no original estimate; that is no ratio at all.
/// Over-budget ratios are capped at 100.
fn work_ratio_percent(v: i64) -> Option<f64> {
    if v < 0 { None } else { Some(v.min(100) as f64) }
}

/// Direct text of every summary paragraph, joined by a space; nested
/// links/formatting are dropped.
fn summary_text(row: &Markup) -> String {
    let Some(td) = row.find_first("td", Some(SUMMARY)) else { return s!() };
    let inner = td.inner(row.src());
    let cell = Markup::new(inner);

    let mut paragraphs = 0usize;
    let mut parts: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some(p) = cell.next_element("p", pos) {
        paragraphs += 1;
        let t = html::direct_text(p.inner(inner));
        if !t.is_empty() { parts.push(t); }
        pos = p.end;
    }

    if paragraphs == 0 { html::direct_text(inner) } else { parts.join(" ") }
}

fn issue_link(row: &Markup) -> Option<String> {
    let td = row.find_first("td", Some(ISSUE_KEY))?;
    let inner = td.inner(row.src());
    let cell = Markup::new(inner);
    let a = cell.find_first("a", None)?;
    html::attr(a.open_tag(inner), "href")
}
