//! Plan command handler

use super::{fail, open_tracker};
use gpa_tracker::config::Config;
use gpa_tracker::core::PlanOutcome;
use gpa_tracker::core::planner::MAX_GRADE_POINT;

/// Run the target planner against the saved roster
pub fn run(target: f64, remaining: f64, config: &Config) {
    let tracker = open_tracker(config);
    let result = match tracker.plan_target(target, remaining) {
        Ok(result) => result,
        Err(e) => fail(e),
    };

    println!(
        "Current: {:.2} over {:.1} credits",
        tracker.weighted_average(),
        tracker.total_credits()
    );
    match result.outcome {
        PlanOutcome::AlreadyExceeded => {
            println!("✓ Target {target:.2} is already reached by your current record");
        }
        PlanOutcome::Unachievable => {
            println!(
                "✗ Target {target:.2} needs a {:.2} average over {remaining:.1} credits, above the {MAX_GRADE_POINT:.1} maximum",
                result.required_average
            );
        }
        PlanOutcome::Achievable { nearest } => {
            println!(
                "✓ Need a {:.2} average over the next {remaining:.1} credits (about {})",
                result.required_average, nearest.token
            );
        }
    }
}
