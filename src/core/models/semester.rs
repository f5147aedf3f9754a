//! Semester model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of a semester entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemesterId(pub u64);

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Overall result of one completed semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterEntry {
    /// Entry identifier
    pub id: SemesterId,
    /// Semester name (e.g., "Spring 2024")
    pub name: String,
    /// Grade symbol token as recorded
    pub grade: String,
    /// Grade-point value of the symbol at entry time
    pub grade_point: f64,
}

impl SemesterEntry {
    /// Create a new semester entry
    #[must_use]
    pub const fn new(id: SemesterId, name: String, grade: String, grade_point: f64) -> Self {
        Self {
            id,
            name,
            grade,
            grade_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_creation() {
        let semester = SemesterEntry::new(
            SemesterId(1),
            "Fall 2023".to_string(),
            "A-".to_string(),
            3.5,
        );
        assert_eq!(semester.name, "Fall 2023");
        assert_eq!(semester.grade, "A-");
        assert!((semester.grade_point - 3.5).abs() < f64::EPSILON);
        assert_eq!(semester.id.to_string(), "1");
    }
}
