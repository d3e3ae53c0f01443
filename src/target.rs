// src/target.rs
//
// Monthly work target. The feed lists work units per month under Indonesian
// month names:
//   { "data": [ { "bulan": "januari", "kerja": 21 }, … ] }
// Target hours = work units of the current month × multiplier.
// Any failure degrades to 0 work units; the report is never blocked on it.

use std::error::Error;

use chrono::Datelike;
use serde::Deserialize;

use crate::config::options::TargetOptions;
use crate::core::net;

/// Month names as they appear in the feed, indexed by month number − 1.
pub const MONTHS: [&str; 12] = [
    "januari", "februari", "maret", "april", "mei", "juni",
    "juli", "agustus", "september", "oktober", "november", "desember",
];

/// 1 = januari … 12 = desember.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get((month as usize).checked_sub(1)?).copied()
}

/// Local calendar month, 1..=12.
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MonthEntry {
    pub bulan: String,
    pub kerja: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TargetFeed {
    pub data: Vec<MonthEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTarget {
    pub month_name: String,
    pub work_units: f64,
}

impl MonthlyTarget {
    pub fn hours(&self, multiplier: f64) -> f64 {
        self.work_units * multiplier
    }
}

/// Entry for `month`; no match (or a bad month index) gives 0 work units.
pub fn select_month(feed: &TargetFeed, month: u32) -> MonthlyTarget {
    let name = month_name(month).unwrap_or_default();
    let work_units = feed
        .data
        .iter()
        .find(|e| !name.is_empty() && e.bulan.trim().eq_ignore_ascii_case(name))
        .map(|e| e.kerja)
        .unwrap_or(0.0);
    MonthlyTarget { month_name: s!(name), work_units }
}

/// Where the feed comes from. Tests substitute a stub.
pub trait TargetSource {
    fn fetch(&self) -> Result<TargetFeed, Box<dyn Error>>;
}

pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl TargetSource for HttpSource {
    fn fetch(&self) -> Result<TargetFeed, Box<dyn Error>> {
        net::get_json(&self.url)
    }
}

/// Fetch once and pick `month`. Errors are logged and become 0 work units.
pub fn lookup(source: &dyn TargetSource, month: u32) -> MonthlyTarget {
    match source.fetch() {
        Ok(feed) => {
            let t = select_month(&feed, month);
            logf!("Target: {} → {} work unit(s) ({} entries)", t.month_name, t.work_units, feed.data.len());
            t
        }
        Err(e) => {
            loge!("Target: fetch failed: {}", e);
            MonthlyTarget { month_name: s!(month_name(month).unwrap_or_default()), work_units: 0.0 }
        }
    }
}

/// Target hours per options: `None` when no feed URL is configured.
pub fn target_hours(opts: &TargetOptions) -> Option<f64> {
    let url = opts.url.as_deref()?;
    logf!("Target: fetching {}", url);
    Some(target_hours_from(&HttpSource::new(url), opts))
}

pub fn target_hours_from(source: &dyn TargetSource, opts: &TargetOptions) -> f64 {
    let month = opts.month.unwrap_or_else(current_month);
    lookup(source, month).hours(opts.multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);
    impl TargetSource for Fixed {
        fn fetch(&self) -> Result<TargetFeed, Box<dyn Error>> {
            Ok(serde_json::from_str(self.0)?)
        }
    }

    struct Down;
    impl TargetSource for Down {
        fn fetch(&self) -> Result<TargetFeed, Box<dyn Error>> {
            Err("connection refused".into())
        }
    }

    const FEED: &str = r#"{"data":[
        {"bulan":"januari","kerja":21},
        {"bulan":"Februari","kerja":19.5},
        {"bulan":"maret","kerja":20}
    ]}"#;

    #[test]
    fn month_table_is_one_based() {
        assert_eq!(month_name(1), Some("januari"));
        assert_eq!(month_name(8), Some("agustus"));
        assert_eq!(month_name(12), Some("desember"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn select_matches_case_insensitively() {
        let feed: TargetFeed = serde_json::from_str(FEED).unwrap();
        assert_eq!(select_month(&feed, 2).work_units, 19.5);
        assert_eq!(select_month(&feed, 3), MonthlyTarget { month_name: s!("maret"), work_units: 20.0 });
    }

    #[test]
    fn missing_month_is_zero() {
        let feed: TargetFeed = serde_json::from_str(FEED).unwrap();
        assert_eq!(select_month(&feed, 7).work_units, 0.0);
        assert_eq!(select_month(&feed, 0).work_units, 0.0);
    }

    #[test]
    fn hours_apply_multiplier() {
        let opts = TargetOptions { url: None, multiplier: 8.0, month: Some(1) };
        assert_eq!(target_hours_from(&Fixed(FEED), &opts), 168.0);
    }

    #[test]
    fn failed_fetch_degrades_to_zero() {
        let opts = TargetOptions { url: None, multiplier: 8.0, month: Some(1) };
        assert_eq!(target_hours_from(&Down, &opts), 0.0);
    }

    #[test]
    fn malformed_payload_degrades_to_zero() {
        let opts = TargetOptions { url: None, multiplier: 8.0, month: Some(1) };
        assert_eq!(target_hours_from(&Fixed(r#"{"rows":[]}"#), &opts), 0.0);
    }

    #[test]
    fn no_url_means_no_target() {
        assert_eq!(target_hours(&TargetOptions::default()), None);
    }
}
