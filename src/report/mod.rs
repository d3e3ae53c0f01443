// src/report/mod.rs
//
// Report builder: extracted rows + totals + optional monthly target.
// `parse` is pure; a new document means a new `Report`, never a merge.

pub mod table;
pub mod totals;

pub use totals::{ aggregate, needed_hours, round2, Totals };

use crate::config::options::{ ReportOptions, ReportVariant };
use crate::specs::issues::{ extract_rows, IssueRow };

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub variant: ReportVariant,
    pub rows: Vec<IssueRow>,
    pub totals: Totals,
}

impl Report {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Same rows and totals, compared against a (new) target.
    pub fn with_target(mut self, target_hours: Option<f64>) -> Self {
        apply_target(&mut self.totals, target_hours);
        self
    }
}

/// Parse a whole export document into a report.
pub fn parse(doc: &str, opts: &ReportOptions, target_hours: Option<f64>) -> Report {
    let rows = extract_rows(doc, opts);
    logd!("Report: {} issue row(s), variant={:?}", rows.len(), opts.variant);
    build(rows, opts.variant, target_hours)
}

pub fn build(rows: Vec<IssueRow>, variant: ReportVariant, target_hours: Option<f64>) -> Report {
    let mut totals = aggregate(&rows, variant);
    apply_target(&mut totals, target_hours);
    Report { variant, rows, totals }
}

fn apply_target(totals: &mut Totals, target_hours: Option<f64>) {
    totals.target = target_hours.map(round2);
    totals.needed_hours = target_hours.map(|t| needed_hours(totals.total_estimate_hours, t));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(rows: &[(&str, &str)]) -> String {
        let mut s = s!("<table><tbody>");
        for (a, b) in rows {
            s.push_str(&format!(
                r#"<tr class="issuerow"><td class="customfield_10028">{a}</td><td class="customfield_10569">{b}</td></tr>"#
            ));
        }
        s.push_str("</tbody></table>");
        s
    }

    #[test]
    fn two_rows_resolve_by_priority_and_sum() {
        let r = parse(&doc(&[("5", ""), ("", "3")]), &ReportOptions::default(), None);
        let est: Vec<f64> = r.rows.iter().map(|r| r.estimate_hours).collect();
        assert_eq!(est, vec![5.0, 3.0]);
        assert_eq!(r.totals.total_estimate_hours, 8.0);
        assert_eq!(r.totals.target, None);
        assert_eq!(r.totals.needed_hours, None);
    }

    #[test]
    fn target_shortfall_is_clamped() {
        let empty = build(Vec::new(), ReportVariant::StoryPoints, Some(100.0));
        assert_eq!(empty.totals.needed_hours, Some(0.0));

        let r = parse(&doc(&[("80", "")]), &ReportOptions::default(), Some(100.0));
        assert_eq!(r.totals.needed_hours, Some(0.0));

        let r = parse(&doc(&[("100", "")]), &ReportOptions::default(), Some(80.0));
        assert_eq!(r.totals.needed_hours, Some(20.0));
    }

    #[test]
    fn with_target_replaces_previous_comparison() {
        let r = parse(&doc(&[("10", "")]), &ReportOptions::default(), Some(16.0));
        assert_eq!(r.totals.needed_hours, Some(0.0));
        let r = r.with_target(Some(4.0));
        assert_eq!(r.totals.target, Some(4.0));
        assert_eq!(r.totals.needed_hours, Some(6.0));
        let r = r.with_target(None);
        assert_eq!(r.totals.needed_hours, None);
    }
}
