//! Semester command handler

use super::{fail, open_tracker};
use crate::args::SemesterSubcommand;
use gpa_tracker::config::Config;
use gpa_tracker::core::SemesterId;

/// Dispatch semester subcommands
pub fn run(subcommand: SemesterSubcommand, config: &Config) {
    let mut tracker = open_tracker(config);

    match subcommand {
        SemesterSubcommand::Add { name, grade } => {
            if let Err(e) = tracker.add_semester(&name, &grade) {
                fail(e);
            }
        }
        SemesterSubcommand::Remove { id } => {
            if !tracker.remove_semester(SemesterId(id)) {
                fail(format!("No semester with id {id}"));
            }
        }
        SemesterSubcommand::Clear => tracker.clear_semesters(),
        SemesterSubcommand::List => {
            if tracker.semesters().is_empty() {
                println!("No semesters recorded.");
            } else {
                println!("\n=== Semesters ===\n");
                for semester in tracker.semesters() {
                    println!(
                        "  [{}] {:<20} {:<4} {:.2}",
                        semester.id, semester.name, semester.grade, semester.grade_point
                    );
                }
                // Unweighted: every semester counts the same regardless of load
                println!("\n  Simple average: {:.2}", tracker.semester_average());
            }
        }
    }

    tracker.close();
}
