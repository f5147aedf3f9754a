//! Named what-if snapshots of the roster

use super::error::GradeError;
use super::models::SubjectEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregates cached at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResults {
    /// Credit-weighted average of the snapshot roster
    pub weighted_gpa: f64,
    /// Total credits of the snapshot roster
    pub total_credits: f64,
}

/// An immutable copy of roster state saved under a name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    /// Name the snapshot is stored under
    pub name: String,
    /// Deep copy of the roster at save time
    pub subjects: Vec<SubjectEntry>,
    /// Preset that was active at save time
    pub active_preset_id: String,
    /// When the snapshot was taken
    pub computed_at: DateTime<Utc>,
    /// Aggregates at save time
    pub cached_results: ScenarioResults,
}

/// Snapshot table keyed by name
///
/// Names are listed in sorted order, which stays stable between mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioBook {
    scenarios: BTreeMap<String, ScenarioSnapshot>,
}

impl ScenarioBook {
    /// Create an empty book
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scenarios: BTreeMap::new(),
        }
    }

    /// Save (or overwrite) a snapshot under `name`
    ///
    /// `subjects` is copied; later changes to the live roster do not reach the snapshot.
    ///
    /// # Errors
    /// Returns `GradeError::EmptyName` if `name` is blank after trimming
    pub fn save(
        &mut self,
        name: &str,
        subjects: &[SubjectEntry],
        preset_id: &str,
        results: ScenarioResults,
        computed_at: DateTime<Utc>,
    ) -> Result<&ScenarioSnapshot, GradeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradeError::EmptyName { what: "Scenario" });
        }
        let snapshot = ScenarioSnapshot {
            name: name.to_string(),
            subjects: subjects.to_vec(),
            active_preset_id: preset_id.to_string(),
            computed_at,
            cached_results: results,
        };
        self.scenarios.insert(name.to_string(), snapshot);
        self.load(name)
    }

    /// Look up a snapshot by name
    ///
    /// # Errors
    /// Returns `GradeError::NotFound` if no snapshot has this name
    pub fn load(&self, name: &str) -> Result<&ScenarioSnapshot, GradeError> {
        let name = name.trim();
        self.scenarios.get(name).ok_or_else(|| GradeError::NotFound {
            name: name.to_string(),
        })
    }

    /// Delete a snapshot
    ///
    /// # Errors
    /// Returns `GradeError::NotFound` if no snapshot has this name
    pub fn remove(&mut self, name: &str) -> Result<ScenarioSnapshot, GradeError> {
        let name = name.trim();
        self.scenarios.remove(name).ok_or_else(|| GradeError::NotFound {
            name: name.to_string(),
        })
    }

    /// Snapshot names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    /// Number of snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether there are no snapshots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
