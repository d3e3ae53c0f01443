// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod specs;
pub mod target;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;

pub use report::{ Report, Totals };
pub use specs::issues::IssueRow;
