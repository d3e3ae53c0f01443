// src/runner.rs
//
// One full report run: read the export, look up the monthly target, parse.
// The CLI uses `run`; the GUI already holds the document and the session's
// target, so it calls `generate` directly.

use std::error::Error;
use std::path::Path;

use crate::{
    config::options::{ AppOptions, ReportOptions },
    file,
    progress::Progress,
    report::{ self, Report },
    target,
};

pub fn run(
    input: &Path,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log(&format!("Reading {}", input.display()));
    }

    let doc = file::read_document(input)?;
    logf!("Run: loaded {} ({} bytes)", input.display(), doc.len());
    if let Some(p) = progress.as_deref_mut() { p.step_done("load"); }

    if opts.target.url.is_some() {
        if let Some(p) = progress.as_deref_mut() { p.log("Fetching monthly target…"); }
    }
    let target_hours = target::target_hours(&opts.target);
    if let Some(p) = progress.as_deref_mut() { p.step_done("target"); }

    Ok(generate(&doc, &opts.report, target_hours, progress))
}

/// Parse an already-loaded document. Never fails: bad rows become zero rows.
pub fn generate(
    doc: &str,
    opts: &ReportOptions,
    target_hours: Option<f64>,
    mut progress: Option<&mut dyn Progress>,
) -> Report {
    let report = report::parse(doc, opts, target_hours);
    logf!(
        "Run: rows={} total={} target={:?}",
        report.rows.len(),
        report.totals.total_estimate_hours,
        report.totals.target
    );
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("parse");
        p.finish();
    }
    report
}
