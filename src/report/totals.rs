// src/report/totals.rs
use crate::config::options::ReportVariant;
use crate::specs::issues::IssueRow;

/// 2-decimal rounding, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Totals {
    /// Sum of the already-rounded per-row estimates.
    pub total_estimate_hours: f64,
    pub total_time_spent_hours: Option<f64>,
    /// Time spent over estimate, percent. Absent when the estimate total is 0
    /// but there are rows to divide.
    pub average_work_ratio: Option<f64>,
    /// Target hours for the month.
    pub target: Option<f64>,
    /// Shortfall against `target`, never negative.
    pub needed_hours: Option<f64>,
}

/// Single pass over `rows`. Target fields are left empty; see `report::build`.
pub fn aggregate(rows: &[IssueRow], variant: ReportVariant) -> Totals {
    let mut estimate = 0.0f64;
    let mut spent = 0.0f64;

    for row in rows {
        estimate += round2(row.estimate_hours);
        spent += row.time_spent_hours.unwrap_or(0.0);
    }

    let (total_time_spent_hours, average_work_ratio) = if variant.tracks_time() {
        (Some(round2(spent)), average_ratio(rows.len(), spent, estimate))
    } else {
        (None, None)
    };

    Totals {
        total_estimate_hours: round2(estimate),
        total_time_spent_hours,
        average_work_ratio,
        target: None,
        needed_hours: None,
    }
}

fn average_ratio(row_count: usize, spent: f64, estimate: f64) -> Option<f64> {
    if row_count == 0 {
        return Some(0.0);
    }
    if estimate == 0.0 {
        logd!("Totals: estimate total is 0 over {} row(s); ratio skipped", row_count);
        return None;
    }
    Some(round2(spent / estimate * 100.0))
}

/// `max(0, total − target)`.
pub fn needed_hours(total_estimate_hours: f64, target_hours: f64) -> f64 {
    round2((total_estimate_hours - target_hours).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(estimate_hours: f64, time_spent_hours: Option<f64>) -> IssueRow {
        IssueRow {
            assignee: s!("A"),
            summary: s!(),
            link: None,
            estimate_hours,
            time_spent_hours,
            work_ratio: None,
            status: None,
        }
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(-2.5), -2.5);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn total_is_sum_of_rounded_rows() {
        // 3618 s = 1.005 h; in binary that is just under 1.005, so each row
        // rounds to 1.00 while the raw sum would round to 2.01.
        let one = 3618.0 / 3600.0;
        assert_eq!(round2(one + one), 2.01);

        let rows = vec![row(one, None), row(one, None)];
        assert_eq!(aggregate(&rows, ReportVariant::StoryPoints).total_estimate_hours, 2.0);
    }

    #[test]
    fn story_points_has_no_time_totals() {
        let t = aggregate(&[row(5.0, None), row(3.0, None)], ReportVariant::StoryPoints);
        assert_eq!(t.total_estimate_hours, 8.0);
        assert_eq!(t.total_time_spent_hours, None);
        assert_eq!(t.average_work_ratio, None);
    }

    #[test]
    fn time_tracking_ratio() {
        let rows = [row(4.0, Some(1.0)), row(6.0, Some(4.0))];
        let t = aggregate(&rows, ReportVariant::TimeTracking);
        assert_eq!(t.total_time_spent_hours, Some(5.0));
        assert_eq!(t.average_work_ratio, Some(50.0));
    }

    #[test]
    fn ratio_for_zero_rows_is_zero() {
        let t = aggregate(&[], ReportVariant::TimeTracking);
        assert_eq!(t.total_estimate_hours, 0.0);
        assert_eq!(t.average_work_ratio, Some(0.0));
    }

    #[test]
    fn ratio_with_zero_estimate_is_skipped() {
        let t = aggregate(&[row(0.0, Some(2.0))], ReportVariant::TimeTracking);
        assert_eq!(t.total_time_spent_hours, Some(2.0));
        assert_eq!(t.average_work_ratio, None);
    }

    #[test]
    fn needed_hours_never_negative() {
        assert_eq!(needed_hours(80.0, 100.0), 0.0);
        assert_eq!(needed_hours(100.0, 80.0), 20.0);
    }
}
