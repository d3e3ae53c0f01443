// src/config/consts.rs

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Target feed
pub const TARGET_URL_ENV: &str = "JIRA_REPORT_TARGET_URL";
pub const USER_AGENT: &str = concat!("jira_report/", env!("CARGO_PKG_VERSION"));
/// Hours per work unit (`kerja`) in the monthly target feed.
pub const DEFAULT_TARGET_MULTIPLIER: f64 = 8.0;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
