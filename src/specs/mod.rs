// src/specs/mod.rs
//! # Export "specs"
//!
//! Where the ground truth lives in a JIRA HTML export and how to read it.
//!
//! - `issues`: the row extractor. One `<tr class="issuerow">` becomes one
//!   [`issues::IssueRow`]; nothing here rejects a row.
//! - `fields`: which cell classes feed which quantity per report variant, and
//!   the fallback rule used when several are present.
//!
//! Specs only extract. Totals, targets and presentation live in `report`,
//! `target` and the frontends.
//!
//! Specs are tested offline against inline HTML fixtures.
pub mod fields;
pub mod issues;
