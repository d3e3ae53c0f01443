// src/specs/fields.rs
//
// Which export columns feed which quantity, and how competing columns are
// resolved. JIRA instances name the same quantity differently (custom field
// ids drift between configurations), so each quantity has an ordered list of
// candidate cell classes. Earlier entries always win; later ones exist only for
// older or differently configured exports.

use crate::config::options::ReportVariant;

/// How a parsed `0` is treated during fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroPolicy {
    /// `0` is a real value and stops the fallback.
    #[default]
    Present,
    /// Legacy behaviour: `0` counts as missing and falls through to the next
    /// candidate (and finally to 0). A genuine zero estimate in an earlier
    /// field is therefore replaced by a later field's value.
    Falsy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Hours,
    Seconds,
}

impl Unit {
    pub fn to_hours(&self, v: i64) -> f64 {
        match self {
            Unit::Hours => v as f64,
            Unit::Seconds => v as f64 / 3600.0,
        }
    }
}

#[derive(Debug)]
pub struct FieldSet {
    pub estimate: &'static [&'static str],
    pub estimate_unit: Unit,
    /// Always seconds. Empty when the variant has no time tracking.
    pub time_spent: &'static [&'static str],
}

pub const STORY_POINTS: FieldSet = FieldSet {
    estimate: &["customfield_10028", "customfield_10569"],
    estimate_unit: Unit::Hours,
    time_spent: &[],
};

pub const TIME_TRACKING: FieldSet = FieldSet {
    estimate: &["timeoriginalestimate", "aggregatetimeoriginalestimate"],
    estimate_unit: Unit::Seconds,
    time_spent: &["timespent", "aggregatetimespent"],
};

pub fn field_set(variant: ReportVariant) -> &'static FieldSet {
    match variant {
        ReportVariant::StoryPoints => &STORY_POINTS,
        ReportVariant::TimeTracking => &TIME_TRACKING,
    }
}

/// First candidate holding a value, in priority order.
pub fn first_present(candidates: &[Option<i64>], policy: ZeroPolicy) -> Option<i64> {
    candidates.iter().copied().flatten().find(|&v| match policy {
        ZeroPolicy::Present => true,
        ZeroPolicy::Falsy => v != 0,
    })
}

/// Resolved value; nothing present resolves to 0.
pub fn resolve(candidates: &[Option<i64>], policy: ZeroPolicy) -> i64 {
    first_present(candidates, policy).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ZeroPolicy::*;

    #[test]
    fn earlier_candidate_wins() {
        assert_eq!(resolve(&[Some(5), Some(3)], Present), 5);
        assert_eq!(resolve(&[None, Some(3)], Present), 3);
        assert_eq!(resolve(&[Some(5), None], Present), 5);
    }

    #[test]
    fn nothing_present_resolves_to_zero() {
        assert_eq!(first_present(&[None, None], Present), None);
        assert_eq!(resolve(&[None, None], Present), 0);
        assert_eq!(resolve(&[], Falsy), 0);
    }

    #[test]
    fn explicit_zero_stops_fallback_by_default() {
        assert_eq!(first_present(&[Some(0), Some(4)], Present), Some(0));
    }

    #[test]
    fn falsy_policy_lets_zero_fall_through() {
        // known imprecision of the legacy rule: a real zero is replaced
        assert_eq!(resolve(&[Some(0), Some(4)], Falsy), 4);
        assert_eq!(first_present(&[Some(0), None], Falsy), None);
        assert_eq!(resolve(&[Some(0), Some(0)], Falsy), 0);
    }

    #[test]
    fn seconds_convert_to_hours() {
        assert_eq!(Unit::Seconds.to_hours(5400), 1.5);
        assert_eq!(Unit::Hours.to_hours(3), 3.0);
    }

    #[test]
    fn variants_keep_documented_order() {
        assert_eq!(field_set(ReportVariant::StoryPoints).estimate[0], "customfield_10028");
        assert_eq!(field_set(ReportVariant::TimeTracking).time_spent, &["timespent", "aggregatetimespent"]);
    }
}
