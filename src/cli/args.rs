//! CLI argument definitions for `gpatracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_tracker::config::ConfigOverrides;
use gpa_tracker::core::InputMode;
use gpa_tracker::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// How a grade value should be read
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    /// Grade symbol such as `A-`
    Letter,
    /// Percentage mark, `%` optional
    Percentage,
    /// Grade-point value
    Gpa,
}

impl From<ModeArg> for InputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Letter => Self::Letter,
            ModeArg::Percentage => Self::Percentage,
            ModeArg::Gpa => Self::Gpa,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `data_file`, `preset`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SubjectSubcommand {
    /// Add a subject to the roster.
    Add {
        /// Subject name
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit hours (0.5 to 6.0)
        #[arg(value_name = "CREDITS")]
        credits: String,
        /// Grade value: letter, percentage or GPA
        #[arg(value_name = "GRADE", allow_hyphen_values = true)]
        grade: String,
        /// How to read GRADE (detected from the value when omitted)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Remove a subject by id.
    Remove {
        /// Subject id as shown by `subject list`
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// Remove every subject.
    Clear,
    /// List subjects with their resolved grades.
    List,
}

#[derive(Debug, Subcommand)]
pub enum SemesterSubcommand {
    /// Record a semester's overall grade.
    Add {
        /// Semester name (e.g., "Fall 2024")
        #[arg(value_name = "NAME")]
        name: String,
        /// Grade symbol in the active preset
        #[arg(value_name = "GRADE", allow_hyphen_values = true)]
        grade: String,
    },
    /// Remove a semester by id.
    Remove {
        /// Semester id as shown by `semester list`
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// Remove every semester.
    Clear,
    /// List semesters and their simple average.
    List,
}

#[derive(Debug, Subcommand)]
pub enum PresetSubcommand {
    /// List available grading presets.
    List,
    /// Switch the active preset and recompute grades.
    Set {
        /// Preset id (e.g., `ugc`, `buet`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show the grade table of a preset (the active one by default).
    Show {
        /// Preset id
        #[arg(value_name = "ID")]
        id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScenarioSubcommand {
    /// Save the current roster as a named scenario.
    Save {
        /// Scenario name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Replace the roster with a saved scenario.
    Load {
        /// Scenario name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Show a saved scenario without loading it.
    Show {
        /// Scenario name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// List saved scenarios.
    List,
    /// Delete a saved scenario.
    Remove {
        /// Scenario name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the subject roster.
    Subject {
        #[command(subcommand)]
        subcommand: SubjectSubcommand,
    },
    /// Manage the semester history.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Inspect or switch grading presets.
    ///
    /// If no subcommand is provided, shows the active preset.
    Preset {
        #[command(subcommand)]
        subcommand: Option<PresetSubcommand>,
    },
    /// Work out the average needed to reach a target GPA.
    Plan {
        /// Target cumulative GPA (0 to 4.0]
        #[arg(value_name = "TARGET")]
        target: f64,
        /// Credit hours still to be taken
        #[arg(value_name = "REMAINING")]
        remaining: f64,
    },
    /// Save, load and compare what-if scenarios.
    Scenario {
        #[command(subcommand)]
        subcommand: ScenarioSubcommand,
    },
    /// Import subjects from a CSV file.
    ///
    /// The header row names the columns; `subject`, `credits` and `grade` (and their
    /// aliases) are recognised.
    Import {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export the roster and summary.
    Export {
        /// Export format: csv, text, or html
        #[arg(short, long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path (defaults to the exports directory; `-` prints to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the current GPA summary.
    Summary,
}

#[derive(Parser, Debug)]
#[command(
    name = "gpatracker",
    about = "Track weighted GPA across grading scales, plan targets and compare scenarios",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this data file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Preset to use when the data file has none
    #[arg(long, value_name = "ID")]
    pub preset: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config exports directory
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides for this run
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(path_string),
            preset: self.preset.clone(),
            exports_dir: self.exports_dir.as_ref().map(path_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gpatracker").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = parse(&["summary"]).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.preset.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = parse(&[
            "--config-level",
            "debug",
            "--data-file",
            "/tmp/grades.json",
            "--preset",
            "buet",
            "--exports-dir",
            "/out",
            "summary",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.data_file.as_deref(), Some("/tmp/grades.json"));
        assert_eq!(overrides.preset.as_deref(), Some("buet"));
        assert_eq!(overrides.exports_dir.as_deref(), Some("/out"));
    }

    #[test]
    fn test_subject_add_with_mode() {
        let cli = parse(&["subject", "add", "Physics", "3", "85", "--mode", "percentage"]);
        match cli.command {
            Command::Subject {
                subcommand:
                    SubjectSubcommand::Add {
                        name,
                        credits,
                        grade,
                        mode,
                    },
            } => {
                assert_eq!(name, "Physics");
                assert_eq!(credits, "3");
                assert_eq!(grade, "85");
                assert_eq!(mode.map(InputMode::from), Some(InputMode::Percentage));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_plan_arguments() {
        let cli = parse(&["plan", "3.5", "30"]);
        assert!(matches!(cli.command, Command::Plan { target, remaining }
            if (target - 3.5).abs() < f64::EPSILON && (remaining - 30.0).abs() < f64::EPSILON));
    }
}
