//! Import command handler

use super::{fail, open_tracker};
use gpa_tracker::config::Config;
use gpa_tracker::core::parse_import_file;
use gpa_tracker::{error, info};
use std::path::Path;

/// Import subjects from a CSV file into the saved roster
pub fn run(file: &Path, config: &Config) {
    let rows = match parse_import_file(file) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read {}: {e}", file.display());
            fail(format!("Failed to read {}: {e}", file.display()));
        }
    };
    info!("Read {} rows from {}", rows.len(), file.display());

    let mut tracker = open_tracker(config);
    let report = tracker.import_rows(&rows);
    tracker.close();

    if report.imported == 0 && report.errors > 0 {
        std::process::exit(1);
    }
}
