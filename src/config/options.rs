// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::specs::fields::ZeroPolicy;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub report: ReportOptions,
    pub target: TargetOptions,
    pub export: ExportOptions,
}

/// Which JIRA export schema the document follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportVariant {
    /// Story point custom fields, already in hours.
    #[default]
    StoryPoints,
    /// Built-in time tracking fields, in seconds.
    TimeTracking,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 2] = [ReportVariant::StoryPoints, ReportVariant::TimeTracking];

    pub fn label(&self) -> &'static str {
        match self {
            ReportVariant::StoryPoints => "Story points",
            ReportVariant::TimeTracking => "Time tracking",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story-points" | "storypoints" | "sp" => Some(ReportVariant::StoryPoints),
            "time-tracking" | "timetracking" | "tt" => Some(ReportVariant::TimeTracking),
            _ => None,
        }
    }

    /// Does this variant carry time spent / work ratio columns?
    pub fn tracks_time(&self) -> bool {
        matches!(self, ReportVariant::TimeTracking)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub variant: ReportVariant,
    pub zero_policy: ZeroPolicy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetOptions {
    /// Feed URL. `None` means no target comparison at all.
    pub url: Option<String>,
    pub multiplier: f64,
    /// Month index 1..=12; `None` uses the local calendar month.
    pub month: Option<u32>,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            url: None,
            multiplier: DEFAULT_TARGET_MULTIPLIER,
            month: None,
        }
    }
}

impl TargetOptions {
    /// Defaults, with the feed URL taken from the environment if set.
    pub fn from_env() -> Self {
        let url = std::env::var(TARGET_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self { url, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; an extension typed by the user wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        match &self.out_path.user_ext {
            Some(ext) => path.push(join!(stem, ".", &ext.to_string_lossy())),
            None => path.push(join!(stem, ".", self.format.ext())),
        }
        path
    }

    /// Parse user text into dir + stem (+ optional explicit extension).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
