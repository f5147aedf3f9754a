//! Subject model

use crate::core::resolver::{GradeInput, InputMode, Resolution};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of a subject entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One graded course in the roster
///
/// Fields are read-only outside the roster; `grade_point` and `label` are derived from
/// `input` under the preset that was active at the last resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    id: SubjectId,
    name: String,
    credit_hours: f64,
    input: GradeInput,
    grade_point: f64,
    label: String,
}

impl SubjectEntry {
    /// Create an entry from validated parts
    #[must_use]
    pub(crate) fn new(
        id: SubjectId,
        name: String,
        credit_hours: f64,
        input: GradeInput,
        resolution: Resolution,
    ) -> Self {
        Self {
            id,
            name,
            credit_hours,
            input,
            grade_point: resolution.grade_point,
            label: resolution.label,
        }
    }

    /// Entry identifier
    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }

    /// Subject name (trimmed)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours
    #[must_use]
    pub const fn credit_hours(&self) -> f64 {
        self.credit_hours
    }

    /// The original user-supplied grade value
    #[must_use]
    pub const fn input(&self) -> &GradeInput {
        &self.input
    }

    /// How the original value is interpreted
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Resolved grade-point value
    #[must_use]
    pub const fn grade_point(&self) -> f64 {
        self.grade_point
    }

    /// Resolved display label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Credit-weighted grade points (credits × grade-point)
    #[must_use]
    pub fn grade_points(&self) -> f64 {
        self.credit_hours * self.grade_point
    }

    pub(crate) fn apply_resolution(&mut self, resolution: Resolution) {
        self.grade_point = resolution.grade_point;
        self.label = resolution.label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubjectEntry {
        SubjectEntry::new(
            SubjectId(7),
            "Data Structures".to_string(),
            3.0,
            GradeInput::Letter("A".to_string()),
            Resolution {
                grade_point: 3.75,
                label: "A".to_string(),
            },
        )
    }

    #[test]
    fn test_subject_accessors() {
        let subject = sample();
        assert_eq!(subject.id(), SubjectId(7));
        assert_eq!(subject.name(), "Data Structures");
        assert_eq!(subject.mode(), InputMode::Letter);
        assert!((subject.grade_points() - 11.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_resolution_keeps_input() {
        let mut subject = sample();
        subject.apply_resolution(Resolution {
            grade_point: 3.5,
            label: "A-".to_string(),
        });
        assert_eq!(subject.label(), "A-");
        assert_eq!(subject.input(), &GradeInput::Letter("A".to_string()));
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["creditHours"], 3.0);
        assert_eq!(json["input"]["mode"], "letter");
        assert_eq!(json["gradePoint"], 3.75);
    }
}
