//! Target grade planner
//!
//! Solves for the average grade-point needed over the remaining credits to reach a
//! target cumulative average, and maps it back to the nearest symbol of the preset.

use super::error::GradeError;
use super::models::SubjectEntry;
use super::roster::{total_credits, total_points};
use super::scale::{GradeSymbol, GradingScalePreset};
use crate::debug;

/// Highest grade-point a remaining course can contribute
pub const MAX_GRADE_POINT: f64 = 4.0;

/// Outcome classification of a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanOutcome {
    /// The current record alone already exceeds the target
    AlreadyExceeded,
    /// The required average is above the scale maximum
    Unachievable,
    /// The target can be met; `nearest` is the closest symbol to the required average
    Achievable {
        /// Symbol whose grade-point is closest to the required average
        nearest: &'static GradeSymbol,
    },
}

/// Result of a target plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// Average grade-point required over the remaining credits (reported in every outcome)
    pub required_average: f64,
    /// Classification of the requirement
    pub outcome: PlanOutcome,
}

impl PlanResult {
    /// Token of the nearest symbol, when achievable
    #[must_use]
    pub const fn nearest_symbol(&self) -> Option<&'static str> {
        match self.outcome {
            PlanOutcome::Achievable { nearest } => Some(nearest.token),
            _ => None,
        }
    }
}

/// Solve for the average needed in the remaining credits
///
/// # Arguments
/// * `target_average` - Desired cumulative average, in (0, 4.0]
/// * `remaining_credits` - Credit-hours still to be taken, finite and > 0
/// * `current` - Subjects already on record
/// * `preset` - Scale used to name the nearest symbol
///
/// # Errors
/// - `InvalidTarget` if the target is outside (0, 4.0]
/// - `InvalidCredits` if remaining credits are not a finite positive number
pub fn solve(
    target_average: f64,
    remaining_credits: f64,
    current: &[SubjectEntry],
    preset: &'static GradingScalePreset,
) -> Result<PlanResult, GradeError> {
    if target_average.is_nan() || target_average <= 0.0 || target_average > MAX_GRADE_POINT {
        return Err(GradeError::InvalidTarget {
            target: target_average,
        });
    }
    if !remaining_credits.is_finite() || remaining_credits <= 0.0 {
        return Err(GradeError::InvalidCredits {
            credits: remaining_credits,
        });
    }

    let credits_needed = total_credits(current) + remaining_credits;
    let required_points = target_average * credits_needed - total_points(current);
    let required_average = required_points / remaining_credits;
    debug!(
        "Plan: target {target_average:.2} over {remaining_credits} more credits needs {required_average:.4}"
    );

    let outcome = if required_average < 0.0 {
        PlanOutcome::AlreadyExceeded
    } else if required_average > preset.max_grade_point() {
        PlanOutcome::Unachievable
    } else {
        nearest_symbol(required_average, preset)
            .map_or(PlanOutcome::Unachievable, |nearest| PlanOutcome::Achievable {
                nearest,
            })
    };

    Ok(PlanResult {
        required_average,
        outcome,
    })
}

/// Symbol closest to `grade_point`; ties go to the first symbol in declared order
#[must_use]
pub fn nearest_symbol(
    grade_point: f64,
    preset: &'static GradingScalePreset,
) -> Option<&'static GradeSymbol> {
    let mut best: Option<(&'static GradeSymbol, f64)> = None;
    for symbol in preset.symbols {
        let diff = (symbol.grade_point - grade_point).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((symbol, diff)),
        }
    }
    best.map(|(symbol, _)| symbol)
}
