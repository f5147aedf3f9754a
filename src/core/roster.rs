//! Subject roster and credit-weighted aggregation

use super::error::GradeError;
use super::models::{SubjectEntry, SubjectId};
use super::resolver::{resolve, GradeInput, InputMode, Resolution};
use super::scale::GradingScalePreset;
use crate::debug;

/// Smallest accepted credit-hour value
pub const MIN_CREDIT_HOURS: f64 = 0.5;
/// Largest accepted credit-hour value
pub const MAX_CREDIT_HOURS: f64 = 6.0;

/// A subject whose grade could not be re-resolved after a preset change
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputeWarning {
    /// Affected subject
    pub id: SubjectId,
    /// Subject name, for display
    pub name: String,
    /// Why the resolver rejected the stored input
    pub error: GradeError,
}

/// Ordered collection of subject entries
///
/// Insertion order is the displayed and exported order. Identifiers come from a
/// monotonic counter and are never handed out twice by the same roster.
#[derive(Debug, Clone)]
pub struct Roster {
    subjects: Vec<SubjectEntry>,
    next_id: u64,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subjects: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a roster from stored entries, resuming ids above the highest one
    #[must_use]
    pub fn from_subjects(subjects: Vec<SubjectEntry>) -> Self {
        let mut roster = Self::new();
        roster.replace_subjects(subjects);
        roster
    }

    /// Entries in insertion order
    #[must_use]
    pub fn subjects(&self) -> &[SubjectEntry] {
        &self.subjects
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: SubjectId) -> Option<&SubjectEntry> {
        self.subjects.iter().find(|s| s.id() == id)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the roster has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Validate and append a subject
    ///
    /// The roster is left unchanged when any check fails.
    ///
    /// # Errors
    /// - `EmptyName` if `name` is blank after trimming
    /// - `InvalidCredit` if `credit_hours` is outside [0.5, 6.0]
    /// - any resolver error for `input` under `preset`
    pub fn add_subject(
        &mut self,
        name: &str,
        credit_hours: f64,
        input: GradeInput,
        preset: &GradingScalePreset,
    ) -> Result<&SubjectEntry, GradeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradeError::EmptyName { what: "Subject" });
        }
        let credit_hours = validate_credit_hours(credit_hours)?;
        let resolution = resolve(&input, preset)?;

        let id = self.allocate_id();
        debug!(
            "Adding subject {id} '{name}' ({credit_hours} cr, {}) -> {:.2}",
            input.mode(),
            resolution.grade_point
        );
        self.subjects.push(SubjectEntry::new(
            id,
            name.to_string(),
            credit_hours,
            input,
            resolution,
        ));
        Ok(&self.subjects[self.subjects.len() - 1])
    }

    /// Remove an entry; returns `false` (and does nothing) if `id` is absent
    pub fn remove_subject(&mut self, id: SubjectId) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id() != id);
        before != self.subjects.len()
    }

    /// Remove every entry
    pub fn clear_all(&mut self) {
        self.subjects.clear();
    }

    /// Replace all entries (used when applying a scenario or loading storage)
    pub fn replace_subjects(&mut self, subjects: Vec<SubjectEntry>) {
        let highest = subjects.iter().map(|s| s.id().0).max().unwrap_or(0);
        self.next_id = self.next_id.max(highest + 1);
        self.subjects = subjects;
    }

    /// Re-resolve letter and percentage entries under a new preset
    ///
    /// All resolutions are computed before any entry is touched. Entries whose input no
    /// longer resolves keep their previous values and are reported as warnings.
    pub fn recompute_for_preset(&mut self, preset: &GradingScalePreset) -> Vec<RecomputeWarning> {
        let mut warnings = Vec::new();
        let updates: Vec<(usize, Resolution)> = self
            .subjects
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s.mode(), InputMode::Letter | InputMode::Percentage))
            .filter_map(|(idx, s)| match resolve(s.input(), preset) {
                Ok(resolution) => Some((idx, resolution)),
                Err(error) => {
                    warnings.push(RecomputeWarning {
                        id: s.id(),
                        name: s.name().to_string(),
                        error,
                    });
                    None
                }
            })
            .collect();

        for (idx, resolution) in updates {
            self.subjects[idx].apply_resolution(resolution);
        }
        warnings
    }

    /// Credit-weighted average of this roster
    #[must_use]
    pub fn weighted_average(&self) -> f64 {
        weighted_average(&self.subjects)
    }

    /// Total credit hours of this roster
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        total_credits(&self.subjects)
    }

    fn allocate_id(&mut self) -> SubjectId {
        let id = SubjectId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a credit-hour value against the accepted range
///
/// # Errors
/// Returns `GradeError::InvalidCredit` when out of [0.5, 6.0] or not a number
pub fn validate_credit_hours(credit_hours: f64) -> Result<f64, GradeError> {
    if (MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&credit_hours) {
        Ok(credit_hours)
    } else {
        Err(GradeError::InvalidCredit {
            value: credit_hours.to_string(),
        })
    }
}

/// Parse credit-hour text; non-numeric input is invalid, never defaulted
///
/// # Errors
/// Returns `GradeError::InvalidCredit` if the text is not a number in [0.5, 6.0]
pub fn parse_credit_hours(text: &str) -> Result<f64, GradeError> {
    let invalid = || GradeError::InvalidCredit {
        value: text.to_string(),
    };
    let value = text.trim().parse::<f64>().map_err(|_| invalid())?;
    validate_credit_hours(value).map_err(|_| invalid())
}

/// Sum of credit hours
#[must_use]
pub fn total_credits(entries: &[SubjectEntry]) -> f64 {
    entries.iter().map(SubjectEntry::credit_hours).sum()
}

/// Sum of credit hours × grade-point
#[must_use]
pub fn total_points(entries: &[SubjectEntry]) -> f64 {
    entries.iter().map(SubjectEntry::grade_points).sum()
}

/// Credit-weighted mean grade-point; `0.0` when there are no credits
#[must_use]
pub fn weighted_average(entries: &[SubjectEntry]) -> f64 {
    let credits = total_credits(entries);
    if credits > 0.0 {
        total_points(entries) / credits
    } else {
        0.0
    }
}
