//! Behavioural properties of the grading engine

use gpa_tracker::core::planner::solve;
use gpa_tracker::core::roster::{total_credits, weighted_average, Roster};
use gpa_tracker::core::{
    default_preset, get_preset, resolve, GradeError, GradeInput, MemoryStore, Notification,
    PlanOutcome, ScenarioBook, ScenarioResults, Tracker,
};

fn letter(token: &str) -> GradeInput {
    GradeInput::Letter(token.to_string())
}

#[test]
fn valid_credits_increase_total_exactly() {
    let preset = default_preset();
    let mut roster = Roster::new();
    let mut expected = 0.0;
    for step in 1..=12 {
        let credits = f64::from(step) * 0.5;
        roster.add_subject("Course", credits, letter("B"), preset).unwrap();
        expected += credits;
        assert!((roster.total_credits() - expected).abs() < 1e-9);
    }
}

#[test]
fn invalid_credits_leave_roster_unchanged() {
    let preset = default_preset();
    let mut roster = Roster::new();
    roster.add_subject("Kept", 3.0, letter("A"), preset).unwrap();
    let before = roster.subjects().to_vec();

    for credits in [0.0, 0.49, -1.0, 6.01, 12.0, f64::NAN] {
        let err = roster
            .add_subject("Rejected", credits, letter("A"), preset)
            .unwrap_err();
        assert!(err.is_validation(), "{credits} gave {err:?}");
        assert_eq!(roster.subjects(), before.as_slice());
    }
}

#[test]
fn empty_roster_aggregates_are_zero() {
    assert!(weighted_average(&[]).abs() < f64::EPSILON);
    assert!(total_credits(&[]).abs() < f64::EPSILON);
}

#[test]
fn equal_credit_average() {
    let preset = get_preset("du").unwrap();
    let mut roster = Roster::new();
    roster
        .add_subject("First", 3.0, GradeInput::Gpa(4.0), preset)
        .unwrap();
    roster
        .add_subject("Second", 3.0, GradeInput::Gpa(3.0), preset)
        .unwrap();
    assert!((roster.weighted_average() - 3.5).abs() < f64::EPSILON);
}

#[test]
fn snapshot_is_isolated_from_live_roster() {
    let preset = default_preset();
    let mut roster = Roster::new();
    roster.add_subject("Math", 3.0, letter("A"), preset).unwrap();
    let at_save = roster.subjects().to_vec();

    let mut book = ScenarioBook::new();
    book.save(
        "plan",
        roster.subjects(),
        preset.id,
        ScenarioResults {
            weighted_gpa: roster.weighted_average(),
            total_credits: roster.total_credits(),
        },
        chrono::Utc::now(),
    )
    .unwrap();

    roster.add_subject("Art", 2.0, letter("C"), preset).unwrap();
    roster.clear_all();

    assert_eq!(book.load("plan").unwrap().subjects, at_save);
}

#[test]
fn percentage_band_boundaries() {
    let preset = default_preset();
    let label = |value: f64| resolve(&GradeInput::Percentage(value), preset).unwrap().label;

    assert_eq!(label(80.0), "A+");
    assert_eq!(label(79.0), "A");
    assert_eq!(label(39.0), "F");
    assert!(matches!(
        resolve(&GradeInput::Percentage(101.0), preset),
        Err(GradeError::OutOfRange { .. })
    ));
}

#[test]
fn planner_exact_match_from_empty_roster() {
    let result = solve(3.5, 30.0, &[], default_preset()).unwrap();
    assert!((result.required_average - 3.5).abs() < 1e-9);
    assert_eq!(result.nearest_symbol(), Some("A-"));
}

#[test]
fn planner_already_exceeded_for_perfect_record() {
    let preset = default_preset();
    let mut roster = Roster::new();
    for name in ["One", "Two", "Three", "Four", "Five"] {
        roster.add_subject(name, 3.0, letter("A+"), preset).unwrap();
    }
    for remaining in [0.5, 1.0, 3.0, 4.5] {
        let result = solve(3.0, remaining, roster.subjects(), preset).unwrap();
        assert_eq!(result.outcome, PlanOutcome::AlreadyExceeded, "{remaining}");
    }
}

#[test]
fn preset_switch_keeps_matching_grade_points() {
    let mut tracker: Tracker<MemoryStore, Vec<Notification>> =
        Tracker::open(MemoryStore::new(), Vec::new(), "ugc");
    tracker.add_subject("Letter", 3.0, letter("B-")).unwrap();
    tracker
        .add_subject("Percent", 3.0, GradeInput::Percentage(57.0))
        .unwrap();
    tracker.add_subject("Points", 3.0, GradeInput::Gpa(2.2)).unwrap();
    let before: Vec<f64> = tracker.subjects().iter().map(|s| s.grade_point()).collect();

    for id in ["du", "buet", "custom"] {
        assert!(tracker.set_preset(id).unwrap().is_empty());
        let after: Vec<f64> = tracker.subjects().iter().map(|s| s.grade_point()).collect();
        assert_eq!(after, before, "grade points moved under {id}");
    }
}
