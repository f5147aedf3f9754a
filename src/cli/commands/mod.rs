//! CLI command handlers for `gpatracker`.
//!
//! Each subcommand lives in its own submodule. Handlers that touch tracker state open
//! it from the configured data file with [`open_tracker`] and save it back on exit.

pub mod config;
pub mod export;
pub mod import;
pub mod plan;
pub mod preset;
pub mod scenario;
pub mod semester;
pub mod subject;
pub mod summary;

use gpa_tracker::config::Config;
use gpa_tracker::core::{JsonFileStore, Notifier, Severity, SubjectEntry, Tracker};
use std::path::PathBuf;

/// Prints tracker notifications in the CLI's `✓` / `✗` style
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    /// Number of error notifications seen
    pub errors: usize,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("✓ {message}"),
            Severity::Info => gpa_tracker::verbose!("{message}"),
            Severity::Warning => eprintln!("⚠️  {message}"),
            Severity::Error => {
                self.errors += 1;
                eprintln!("✗ {message}");
            }
        }
    }
}

/// Tracker type used by every state-touching command
pub type CliTracker = Tracker<JsonFileStore, ConsoleNotifier>;

/// Data file from config, or `tracker.json` in the config directory
pub fn data_file(config: &Config) -> PathBuf {
    if config.storage.data_file.is_empty() {
        Config::get_tracker_dir().join("tracker.json")
    } else {
        PathBuf::from(&config.storage.data_file)
    }
}

/// Open the tracker from the configured data file
pub fn open_tracker(config: &Config) -> CliTracker {
    let path = data_file(config);
    gpa_tracker::debug!("Opening data file {}", path.display());
    Tracker::open(
        JsonFileStore::new(path),
        ConsoleNotifier::default(),
        &config.grading.preset,
    )
}

/// Print an error line and exit non-zero
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// One roster line for listings
pub fn subject_line(subject: &SubjectEntry) -> String {
    format!(
        "  [{}] {:<24} {:>4.1} cr  {:<6} {:.2}  ({})",
        subject.id(),
        subject.name(),
        subject.credit_hours(),
        subject.label(),
        subject.grade_point(),
        subject.mode()
    )
}
