//! Preset command handler

use super::{fail, open_tracker};
use crate::args::PresetSubcommand;
use gpa_tracker::config::Config;
use gpa_tracker::core::{get_preset, list_presets, GradingScalePreset};

/// Dispatch preset subcommands
pub fn run(subcommand: Option<PresetSubcommand>, config: &Config) {
    match subcommand {
        Some(PresetSubcommand::List) => handle_list(config),
        Some(PresetSubcommand::Set { id }) => handle_set(&id, config),
        Some(PresetSubcommand::Show { id: Some(id) }) => match get_preset(&id) {
            Ok(preset) => print_table(preset),
            Err(e) => fail(e),
        },
        Some(PresetSubcommand::Show { id: None }) | None => {
            let tracker = open_tracker(config);
            print_table(tracker.active_preset());
        }
    }
}

fn handle_list(config: &Config) {
    let tracker = open_tracker(config);
    let active = tracker.active_preset().id;
    println!("\n=== Grading presets ===\n");
    for (id, name) in list_presets() {
        let marker = if id == active { "*" } else { " " };
        println!("{marker} {id:<8} {name}");
    }
}

fn handle_set(id: &str, config: &Config) {
    let mut tracker = open_tracker(config);
    match tracker.set_preset(id) {
        Ok(warnings) => {
            println!("✓ Active preset: {}", tracker.active_preset().display_name);
            if !warnings.is_empty() {
                println!("  {} subject(s) kept their previous grade", warnings.len());
            }
        }
        Err(e) => fail(e),
    }
    tracker.close();
}

fn print_table(preset: &GradingScalePreset) {
    println!("\n=== {} ({}) ===", preset.display_name, preset.id);
    if !preset.description.is_empty() {
        println!("{}", preset.description);
    }
    println!("\n  Grade  Points  Percent");
    for symbol in preset.symbols {
        let band = symbol
            .band
            .map_or_else(String::new, |b| format!("{:.0}-{:.0}", b.min, b.max));
        println!("  {:<6} {:<7.2} {band}", symbol.token, symbol.grade_point);
    }
}
