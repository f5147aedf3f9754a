//! Persistence collaborator
//!
//! The tracker mirrors its state into a `SnapshotStore` after every mutation. In-memory
//! state stays the source of truth; a store is a best-effort copy.

use super::error::StorageError;
use super::models::{SemesterEntry, SubjectEntry};
use super::scale::DEFAULT_PRESET_ID;
use super::scenario::ScenarioBook;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything that survives between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Subject roster, in display order
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
    /// Scenario table keyed by name
    #[serde(default)]
    pub scenarios: ScenarioBook,
    /// Id of the active grading preset
    #[serde(default = "default_preset_id")]
    pub active_preset_id: String,
    /// Semester history, in display order
    #[serde(default)]
    pub semesters: Vec<SemesterEntry>,
}

fn default_preset_id() -> String {
    DEFAULT_PRESET_ID.to_string()
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            scenarios: ScenarioBook::new(),
            active_preset_id: default_preset_id(),
            semesters: Vec::new(),
        }
    }
}

/// Trait for loading and saving tracker state
pub trait SnapshotStore {
    /// Load the stored state, or `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns an error if the stored state exists but cannot be read
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;

    /// Replace the stored state
    ///
    /// # Errors
    /// Returns an error if the state cannot be written
    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError>;
}

/// Stores state as a pretty-printed JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path` (the file is created on first save)
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store, with optional simulated save failures
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<PersistedState>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `state`
    #[must_use]
    pub const fn with_state(state: PersistedState) -> Self {
        Self {
            state: Some(state),
            fail_saves: false,
            saves: 0,
        }
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The last successfully saved state
    #[must_use]
    pub const fn state(&self) -> Option<&PersistedState> {
        self.state.as_ref()
    }

    /// Number of successful saves
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Unavailable {
                message: "quota exceeded".to_string(),
            });
        }
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_failure_keeps_previous_state() {
        let mut store = MemoryStore::new();
        store.save(&PersistedState::default()).unwrap();
        store.set_fail_saves(true);

        let changed = PersistedState {
            active_preset_id: "du".to_string(),
            ..PersistedState::default()
        };
        assert!(store.save(&changed).is_err());
        assert_eq!(store.state().unwrap().active_preset_id, "ugc");
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn test_top_level_keys() {
        let json = serde_json::to_value(PersistedState::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["subjects", "scenarios", "activePresetId", "semesters"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }
}
