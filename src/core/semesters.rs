//! Multi-semester history
//!
//! Kept apart from the subject roster: the aggregate here is an unweighted mean of
//! per-semester grade-points, not a credit-weighted figure.

use super::error::GradeError;
use super::models::{SemesterEntry, SemesterId};
use super::scale::GradingScalePreset;
use crate::debug;

/// Ordered collection of completed semesters
#[derive(Debug, Clone)]
pub struct SemesterLog {
    semesters: Vec<SemesterEntry>,
    next_id: u64,
}

impl SemesterLog {
    /// Create an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a log from stored entries, resuming ids above the highest one
    #[must_use]
    pub fn from_semesters(semesters: Vec<SemesterEntry>) -> Self {
        let highest = semesters.iter().map(|s| s.id.0).max().unwrap_or(0);
        Self {
            semesters,
            next_id: highest + 1,
        }
    }

    /// Entries in insertion order
    #[must_use]
    pub fn semesters(&self) -> &[SemesterEntry] {
        &self.semesters
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether the log has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Record a semester's overall grade symbol
    ///
    /// # Errors
    /// - `EmptyName` if `name` is blank after trimming
    /// - `UnknownGradeSymbol` if `grade` is not in `preset`
    pub fn add_semester(
        &mut self,
        name: &str,
        grade: &str,
        preset: &GradingScalePreset,
    ) -> Result<&SemesterEntry, GradeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradeError::EmptyName { what: "Semester" });
        }
        let symbol = preset
            .symbol(grade)
            .ok_or_else(|| GradeError::UnknownGradeSymbol {
                symbol: grade.to_string(),
            })?;

        let id = SemesterId(self.next_id);
        self.next_id += 1;
        debug!("Adding semester {id} '{name}' -> {}", symbol.token);
        self.semesters.push(SemesterEntry::new(
            id,
            name.to_string(),
            symbol.token.to_string(),
            symbol.grade_point,
        ));
        Ok(&self.semesters[self.semesters.len() - 1])
    }

    /// Remove a semester; returns `false` if `id` is absent
    pub fn remove_semester(&mut self, id: SemesterId) -> bool {
        let before = self.semesters.len();
        self.semesters.retain(|s| s.id != id);
        before != self.semesters.len()
    }

    /// Remove every semester
    pub fn clear_all(&mut self) {
        self.semesters.clear();
    }

    /// Unweighted mean grade-point of this log
    #[must_use]
    pub fn simple_average(&self) -> f64 {
        simple_average(&self.semesters)
    }
}

impl Default for SemesterLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean of semester grade-points; `0.0` when empty
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn simple_average(entries: &[SemesterEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|s| s.grade_point).sum::<f64>() / entries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::default_preset;

    #[test]
    fn test_simple_average_ignores_weighting() {
        let mut log = SemesterLog::new();
        log.add_semester("Fall", "A+", default_preset()).unwrap();
        log.add_semester("Spring", "B", default_preset()).unwrap();
        log.add_semester("Summer", "c", default_preset()).unwrap();
        let expected = (4.0 + 3.0 + 2.25) / 3.0;
        assert!((log.simple_average() - expected).abs() < 1e-12);
        assert_eq!(log.semesters()[2].grade, "C");
    }

    #[test]
    fn test_empty_average_is_zero() {
        assert!(SemesterLog::new().simple_average().abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_semester_validation() {
        let mut log = SemesterLog::new();
        assert_eq!(
            log.add_semester(" ", "A", default_preset()).unwrap_err(),
            GradeError::EmptyName { what: "Semester" }
        );
        assert!(matches!(
            log.add_semester("Fall", "Q", default_preset()),
            Err(GradeError::UnknownGradeSymbol { .. })
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn test_remove_and_resume_ids() {
        let mut log = SemesterLog::new();
        let id = log.add_semester("Fall", "A", default_preset()).unwrap().id;
        assert!(!log.remove_semester(SemesterId(42)));
        assert!(log.remove_semester(id));
        assert!(log.is_empty());

        let stored = vec![SemesterEntry::new(
            SemesterId(9),
            "Old".to_string(),
            "B".to_string(),
            3.0,
        )];
        let mut restored = SemesterLog::from_semesters(stored);
        let next = restored
            .add_semester("New", "A", default_preset())
            .unwrap()
            .id;
        assert_eq!(next, SemesterId(10));
    }
}
