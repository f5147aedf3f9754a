//! Subject command handler

use super::{fail, open_tracker, subject_line};
use crate::args::SubjectSubcommand;
use gpa_tracker::config::Config;
use gpa_tracker::core::SubjectId;

/// Dispatch subject subcommands
pub fn run(subcommand: SubjectSubcommand, config: &Config) {
    let mut tracker = open_tracker(config);

    match subcommand {
        SubjectSubcommand::Add {
            name,
            credits,
            grade,
            mode,
        } => {
            if let Err(e) =
                tracker.add_subject_from_text(&name, &credits, &grade, mode.map(Into::into))
            {
                fail(e);
            }
            gpa_tracker::verbose!(
                "Weighted GPA is now {:.2} over {:.1} credits",
                tracker.weighted_average(),
                tracker.total_credits()
            );
        }
        SubjectSubcommand::Remove { id } => {
            if !tracker.remove_subject(SubjectId(id)) {
                fail(format!("No subject with id {id}"));
            }
        }
        SubjectSubcommand::Clear => tracker.clear_subjects(),
        SubjectSubcommand::List => {
            if tracker.subjects().is_empty() {
                println!("No subjects yet. Add one with `gpatracker subject add`.");
            } else {
                println!("\n=== Subjects ({}) ===\n", tracker.active_preset().display_name);
                for subject in tracker.subjects() {
                    println!("{}", subject_line(subject));
                }
                println!(
                    "\n  Weighted GPA: {:.2}   Total credits: {:.1}",
                    tracker.weighted_average(),
                    tracker.total_credits()
                );
            }
        }
    }

    tracker.close();
}
