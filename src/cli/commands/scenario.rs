//! Scenario command handler

use super::{fail, open_tracker, subject_line};
use crate::args::ScenarioSubcommand;
use gpa_tracker::config::Config;

/// Dispatch scenario subcommands
pub fn run(subcommand: ScenarioSubcommand, config: &Config) {
    let mut tracker = open_tracker(config);

    match subcommand {
        ScenarioSubcommand::Save { name } => {
            if let Err(e) = tracker.save_scenario(&name) {
                fail(e);
            }
        }
        ScenarioSubcommand::Load { name } => {
            if let Err(e) = tracker.apply_scenario(&name) {
                fail(e);
            }
            println!(
                "  Weighted GPA: {:.2} under {}",
                tracker.weighted_average(),
                tracker.active_preset().display_name
            );
        }
        ScenarioSubcommand::Show { name } => {
            let snapshot = match tracker.scenario(&name) {
                Ok(snapshot) => snapshot,
                Err(e) => fail(e),
            };
            println!("\n=== Scenario '{}' ===\n", snapshot.name);
            println!("  Preset:  {}", snapshot.active_preset_id);
            println!(
                "  Saved:   {}",
                snapshot.computed_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!(
                "  GPA:     {:.2} over {:.1} credits\n",
                snapshot.cached_results.weighted_gpa, snapshot.cached_results.total_credits
            );
            for subject in &snapshot.subjects {
                println!("{}", subject_line(subject));
            }
            return;
        }
        ScenarioSubcommand::List => {
            let names: Vec<&str> = tracker.scenario_names().collect();
            if names.is_empty() {
                println!("No saved scenarios.");
            } else {
                for name in names {
                    println!("  {name}");
                }
            }
            return;
        }
        ScenarioSubcommand::Remove { name } => {
            if let Err(e) = tracker.remove_scenario(&name) {
                fail(e);
            }
        }
    }

    tracker.close();
}
