//! Summary command handler

use super::open_tracker;
use gpa_tracker::config::Config;

/// Print the aggregate figures for the saved state
pub fn run(config: &Config) {
    let tracker = open_tracker(config);

    println!("\n=== GPA summary ===\n");
    println!("  Preset:         {}", tracker.active_preset().display_name);
    println!("  Subjects:       {}", tracker.subjects().len());
    println!("  Total credits:  {:.1}", tracker.total_credits());
    println!("  Weighted GPA:   {:.2}", tracker.weighted_average());
    if !tracker.semesters().is_empty() {
        println!(
            "  Semester avg:   {:.2} ({} semesters)",
            tracker.semester_average(),
            tracker.semesters().len()
        );
    }
    let scenarios = tracker.scenario_names().count();
    if scenarios > 0 {
        println!("  Scenarios:      {scenarios}");
    }
}
