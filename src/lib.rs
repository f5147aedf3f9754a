//! Grade tracker library
//!
//! Weighted GPA under selectable grading-scale presets, target planning, scenario
//! snapshots and CSV import/export. The `gpatracker` CLI is a thin layer over
//! [`core::Tracker`].

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `gpa-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
