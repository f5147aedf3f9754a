//! Export command handler
//!
//! Writes the roster and summary as CSV, plain text or printable HTML.

use super::{fail, open_tracker};
use gpa_tracker::config::Config;
use gpa_tracker::core::ExportFormat;
use gpa_tracker::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the export command
///
/// With no `output`, the file goes to the configured exports directory as
/// `gpa-summary-<date>.<ext>`. An output of `-` prints to stdout.
pub fn run(format_str: &str, output: Option<&Path>, config: &Config) {
    let format = match ExportFormat::from_str(format_str) {
        Ok(format) => format,
        Err(e) => fail(e),
    };
    let tracker = open_tracker(config);
    let today = chrono::Local::now().date_naive();
    let ctx = tracker.export_context(today);
    let generator = format.generator();

    if output == Some(Path::new("-")) {
        match generator.render(&ctx) {
            Ok(content) => print!("{content}"),
            Err(e) => fail(e),
        }
        return;
    }

    let output_path = output.map_or_else(
        || {
            PathBuf::from(&config.paths.exports_dir).join(format!(
                "gpa-summary-{}.{}",
                ctx.date_label(),
                format.extension()
            ))
        },
        Path::to_path_buf,
    );

    if let Err(e) = generator.generate(&ctx, &output_path) {
        error!("{format} export to {} failed: {e}", output_path.display());
        fail(format!("Failed to export: {e}"));
    }
    info!("Exported {} subjects as {format}", ctx.subjects.len());
    println!("✓ Exported to {}", output_path.display());
}
