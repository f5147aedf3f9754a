//! Command-line interface entry point for `gpatracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_tracker::config::Config;
use gpa_tracker::info;
use gpa_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    if !config.logging.file.is_empty() {
        let log_path = std::path::PathBuf::from(&config.logging.file);
        let display_path = log_path.to_string_lossy();
        if init_file_logging(&log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Subject { subcommand } => commands::subject::run(subcommand, &config),
        Command::Semester { subcommand } => commands::semester::run(subcommand, &config),
        Command::Preset { subcommand } => commands::preset::run(subcommand, &config),
        Command::Plan { target, remaining } => commands::plan::run(target, remaining, &config),
        Command::Scenario { subcommand } => commands::scenario::run(subcommand, &config),
        Command::Import { file } => commands::import::run(&file, &config),
        Command::Export { format, output } => {
            commands::export::run(&format, output.as_deref(), &config);
        }
        Command::Summary => commands::summary::run(&config),
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
