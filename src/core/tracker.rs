//! Application state
//!
//! `Tracker` owns the live roster, semester history, scenario table and active preset.
//! It is created with [`Tracker::open`], mirrors itself into a [`SnapshotStore`] after
//! every successful mutation, and hands the store back from [`Tracker::close`]. Opening
//! and closing without changes never writes, so unreadable data is left on disk.
//!
//! Storage failures never roll back or corrupt in-memory state: they are logged and
//! reported through the [`Notifier`], and the tracker carries on.

use super::error::GradeError;
use super::export::ExportContext;
use super::import::{ImportReport, ImportRow};
use super::models::{SemesterEntry, SemesterId, SubjectEntry, SubjectId};
use super::notify::{Notifier, Severity};
use super::planner::{self, PlanResult};
use super::resolver::{GradeInput, InputMode};
use super::roster::{parse_credit_hours, RecomputeWarning, Roster};
use super::scale::{default_preset, get_preset, GradingScalePreset};
use super::scenario::{ScenarioBook, ScenarioResults, ScenarioSnapshot};
use super::semesters::SemesterLog;
use super::storage::{PersistedState, SnapshotStore};
use crate::{debug, error, info, warn};
use chrono::{NaiveDate, Utc};

/// Live grade-tracking session
pub struct Tracker<S: SnapshotStore, N: Notifier> {
    store: S,
    notifier: N,
    roster: Roster,
    semesters: SemesterLog,
    scenarios: ScenarioBook,
    preset: &'static GradingScalePreset,
    /// In-memory state the store has not accepted yet
    unsaved: bool,
}

impl<S: SnapshotStore, N: Notifier> Tracker<S, N> {
    /// Open a session from whatever `store` holds
    ///
    /// A store that fails to load is reported and the session starts empty. Stored
    /// preset ids that are no longer known fall back to `default_preset_id` (and that
    /// in turn to the built-in default).
    pub fn open(store: S, mut notifier: N, default_preset_id: &str) -> Self {
        let fallback = get_preset(default_preset_id).unwrap_or_else(|e| {
            warn!("{e}; using {}", default_preset().id);
            default_preset()
        });

        let loaded = match store.load() {
            Ok(state) => state,
            Err(e) => {
                error!("Failed to load saved data: {e}");
                notifier.notify(
                    &format!("Could not load saved data ({e}); starting fresh"),
                    Severity::Error,
                );
                None
            }
        };

        let Some(state) = loaded else {
            debug!("No saved data; starting with preset '{}'", fallback.id);
            return Self {
                store,
                notifier,
                roster: Roster::new(),
                semesters: SemesterLog::new(),
                scenarios: ScenarioBook::new(),
                preset: fallback,
                unsaved: false,
            };
        };

        let preset = match get_preset(&state.active_preset_id) {
            Ok(preset) => preset,
            Err(e) => {
                warn!("{e}; falling back to '{}'", fallback.id);
                notifier.notify(
                    &format!(
                        "Saved preset '{}' is not available; using {}",
                        state.active_preset_id, fallback.display_name
                    ),
                    Severity::Warning,
                );
                fallback
            }
        };

        info!(
            "Loaded {} subjects, {} semesters, {} scenarios",
            state.subjects.len(),
            state.semesters.len(),
            state.scenarios.len()
        );
        Self {
            store,
            notifier,
            roster: Roster::from_subjects(state.subjects),
            semesters: SemesterLog::from_semesters(state.semesters),
            scenarios: state.scenarios,
            preset,
            unsaved: false,
        }
    }

    /// Retry any save that failed earlier and give the store back
    pub fn close(mut self) -> S {
        if self.unsaved {
            self.persist();
        }
        self.store
    }

    // ----- subjects -----

    /// Add a subject with an already-typed grade input
    ///
    /// # Errors
    /// Validation and resolver errors from [`Roster::add_subject`]; nothing changes on error
    pub fn add_subject(
        &mut self,
        name: &str,
        credit_hours: f64,
        input: GradeInput,
    ) -> Result<SubjectId, GradeError> {
        let entry = self
            .roster
            .add_subject(name, credit_hours, input, self.preset)?;
        let (id, message) = (entry.id(), format!("Added {} ({})", entry.name(), entry.label()));
        self.persist();
        self.notifier.notify(&message, Severity::Success);
        Ok(id)
    }

    /// Add a subject from raw text fields
    ///
    /// With `mode` unset the grade mode is inferred from the value text.
    ///
    /// # Errors
    /// `EmptyName`, `InvalidCredit`, `InvalidNumber` or any resolver error
    pub fn add_subject_from_text(
        &mut self,
        name: &str,
        credit_text: &str,
        value_text: &str,
        mode: Option<InputMode>,
    ) -> Result<SubjectId, GradeError> {
        let (credit_hours, input) = Self::parse_fields(name, credit_text, value_text, mode)?;
        self.add_subject(name, credit_hours, input)
    }

    /// Remove a subject; returns `false` if there was none with this id
    pub fn remove_subject(&mut self, id: SubjectId) -> bool {
        if !self.roster.remove_subject(id) {
            debug!("Subject {id} not found; nothing removed");
            return false;
        }
        self.persist();
        self.notifier.notify("Subject removed", Severity::Success);
        true
    }

    /// Remove every subject
    pub fn clear_subjects(&mut self) {
        self.roster.clear_all();
        self.persist();
        self.notifier.notify("All subjects cleared", Severity::Success);
    }

    /// Feed parsed import rows through the usual validation
    ///
    /// Rows that fail are counted and skipped. State is saved once at the end.
    pub fn import_rows(&mut self, rows: &[ImportRow]) -> ImportReport {
        let mut report = ImportReport::default();
        for row in rows {
            let added = Self::parse_fields(&row.name, &row.credit_text, &row.value_text, None)
                .and_then(|(credits, input)| {
                    self.roster
                        .add_subject(&row.name, credits, input, self.preset)
                        .map(|_| ())
                });
            match added {
                Ok(()) => report.imported += 1,
                Err(e) => {
                    debug!("Skipping import row '{}': {e}", row.name);
                    report.errors += 1;
                }
            }
        }

        if report.imported > 0 {
            self.persist();
        }
        let message = format!(
            "Imported {} subjects ({} errors)",
            report.imported, report.errors
        );
        info!("{message}");
        let severity = if report.errors == 0 {
            Severity::Success
        } else {
            Severity::Warning
        };
        self.notifier.notify(&message, severity);
        report
    }

    // ----- preset -----

    /// Switch the active preset and re-resolve letter and percentage entries
    ///
    /// Entries that no longer resolve keep their old values; each one is returned and
    /// reported as a warning.
    ///
    /// # Errors
    /// `UnknownPreset` if `id` is not registered; nothing changes in that case
    pub fn set_preset(&mut self, id: &str) -> Result<Vec<RecomputeWarning>, GradeError> {
        let preset = get_preset(id)?;
        self.preset = preset;
        let warnings = self.roster.recompute_for_preset(preset);
        for warning in &warnings {
            warn!("Kept previous grade for '{}': {}", warning.name, warning.error);
            self.notifier.notify(
                &format!("'{}' kept its previous grade: {}", warning.name, warning.error),
                Severity::Warning,
            );
        }
        self.persist();
        self.notifier.notify(
            &format!("Switched to {}", preset.display_name),
            Severity::Info,
        );
        Ok(warnings)
    }

    // ----- semesters -----

    /// Record a semester by its overall grade symbol
    ///
    /// # Errors
    /// `EmptyName` or `UnknownGradeSymbol`
    pub fn add_semester(&mut self, name: &str, grade: &str) -> Result<SemesterId, GradeError> {
        let entry = self.semesters.add_semester(name, grade, self.preset)?;
        let (id, message) = (entry.id, format!("Added {} ({})", entry.name, entry.grade));
        self.persist();
        self.notifier.notify(&message, Severity::Success);
        Ok(id)
    }

    /// Remove a semester; returns `false` if there was none with this id
    pub fn remove_semester(&mut self, id: SemesterId) -> bool {
        if !self.semesters.remove_semester(id) {
            debug!("Semester {id} not found; nothing removed");
            return false;
        }
        self.persist();
        self.notifier.notify("Semester removed", Severity::Success);
        true
    }

    /// Remove every semester
    pub fn clear_semesters(&mut self) {
        self.semesters.clear_all();
        self.persist();
        self.notifier
            .notify("All semesters cleared", Severity::Success);
    }

    // ----- scenarios -----

    /// Snapshot the live roster under `name`, replacing any snapshot of that name
    ///
    /// # Errors
    /// `EmptyName` if the name is blank
    pub fn save_scenario(&mut self, name: &str) -> Result<(), GradeError> {
        let results = ScenarioResults {
            weighted_gpa: self.roster.weighted_average(),
            total_credits: self.roster.total_credits(),
        };
        let saved = self.scenarios.save(
            name,
            self.roster.subjects(),
            self.preset.id,
            results,
            Utc::now(),
        )?;
        let message = format!("Scenario '{}' saved", saved.name);
        self.persist();
        self.notifier.notify(&message, Severity::Success);
        Ok(())
    }

    /// Delete a snapshot
    ///
    /// # Errors
    /// `NotFound` if no snapshot has this name
    pub fn remove_scenario(&mut self, name: &str) -> Result<(), GradeError> {
        let removed = self.scenarios.remove(name)?;
        self.persist();
        self.notifier.notify(
            &format!("Scenario '{}' deleted", removed.name),
            Severity::Success,
        );
        Ok(())
    }

    /// Make a snapshot the live roster and activate its preset
    ///
    /// # Errors
    /// `NotFound` if no snapshot has this name
    pub fn apply_scenario(&mut self, name: &str) -> Result<(), GradeError> {
        let snapshot = self.scenarios.load(name)?.clone();
        let preset = match get_preset(&snapshot.active_preset_id) {
            Ok(preset) => preset,
            Err(e) => {
                warn!("{e}; keeping {}", self.preset.id);
                self.preset
            }
        };
        self.roster.replace_subjects(snapshot.subjects);
        self.preset = preset;
        self.persist();
        self.notifier.notify(
            &format!("Scenario '{}' loaded", snapshot.name),
            Severity::Success,
        );
        Ok(())
    }

    // ----- reads -----

    /// Subjects in display order
    #[must_use]
    pub fn subjects(&self) -> &[SubjectEntry] {
        self.roster.subjects()
    }

    /// Semesters in display order
    #[must_use]
    pub fn semesters(&self) -> &[SemesterEntry] {
        self.semesters.semesters()
    }

    /// Currently active preset
    #[must_use]
    pub const fn active_preset(&self) -> &'static GradingScalePreset {
        self.preset
    }

    /// Credit-weighted average of the live roster
    #[must_use]
    pub fn weighted_average(&self) -> f64 {
        self.roster.weighted_average()
    }

    /// Total credit hours of the live roster
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.roster.total_credits()
    }

    /// Unweighted mean of the semester history
    #[must_use]
    pub fn semester_average(&self) -> f64 {
        self.semesters.simple_average()
    }

    /// Average needed over `remaining_credits` more credits to reach `target`
    ///
    /// # Errors
    /// `InvalidTarget` or `InvalidCredits`
    pub fn plan_target(&self, target: f64, remaining_credits: f64) -> Result<PlanResult, GradeError> {
        planner::solve(target, remaining_credits, self.roster.subjects(), self.preset)
    }

    /// Look at a snapshot without applying it
    ///
    /// # Errors
    /// `NotFound` if no snapshot has this name
    pub fn scenario(&self, name: &str) -> Result<&ScenarioSnapshot, GradeError> {
        self.scenarios.load(name)
    }

    /// Snapshot names in sorted order
    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.names()
    }

    /// Export data for the live state, stamped with `exported_on`
    #[must_use]
    pub fn export_context(&self, exported_on: NaiveDate) -> ExportContext<'_> {
        ExportContext {
            subjects: self.roster.subjects(),
            preset: self.preset,
            weighted_gpa: self.roster.weighted_average(),
            total_credits: self.roster.total_credits(),
            semester_average: self.semesters.simple_average(),
            semester_count: self.semesters.len(),
            exported_on,
        }
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Backing store, mutably (e.g. to inject failures in tests)
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Notification sink
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    fn parse_fields(
        name: &str,
        credit_text: &str,
        value_text: &str,
        mode: Option<InputMode>,
    ) -> Result<(f64, GradeInput), GradeError> {
        if name.trim().is_empty() {
            return Err(GradeError::EmptyName { what: "Subject" });
        }
        let credit_hours = parse_credit_hours(credit_text)?;
        let input = match mode {
            Some(mode) => GradeInput::parse(mode, value_text)?,
            None => GradeInput::detect(value_text)?,
        };
        Ok((credit_hours, input))
    }

    fn state(&self) -> PersistedState {
        PersistedState {
            subjects: self.roster.subjects().to_vec(),
            scenarios: self.scenarios.clone(),
            active_preset_id: self.preset.id.to_string(),
            semesters: self.semesters.semesters().to_vec(),
        }
    }

    fn persist(&mut self) {
        let state = self.state();
        match self.store.save(&state) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                self.unsaved = true;
                error!("Failed to save data: {e}");
                self.notifier
                    .notify(&format!("Could not save data: {e}"), Severity::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::Notification;
    use crate::core::planner::PlanOutcome;
    use crate::core::storage::MemoryStore;

    type TestTracker = Tracker<MemoryStore, Vec<Notification>>;

    fn tracker() -> TestTracker {
        Tracker::open(MemoryStore::new(), Vec::new(), "ugc")
    }

    fn letter(token: &str) -> GradeInput {
        GradeInput::Letter(token.to_string())
    }

    #[test]
    fn test_open_empty_store() {
        let t = tracker();
        assert!(t.subjects().is_empty());
        assert_eq!(t.active_preset().id, "ugc");
        assert!(t.notifier().is_empty());
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, letter("A+")).unwrap();
        assert_eq!(t.store().save_count(), 1);
        let saved = t.store().state().unwrap();
        assert_eq!(saved.subjects.len(), 1);
        assert_eq!(t.notifier()[0].severity, Severity::Success);
    }

    #[test]
    fn test_failed_add_changes_nothing() {
        let mut t = tracker();
        let err = t.add_subject("Math", 7.0, letter("A")).unwrap_err();
        assert!(err.is_validation());
        assert!(t.subjects().is_empty());
        assert_eq!(t.store().save_count(), 0);
    }

    #[test]
    fn test_from_text_detects_mode() {
        let mut t = tracker();
        t.add_subject_from_text("Physics", "3", "85%", None).unwrap();
        t.add_subject_from_text("Chem", "3", "3.2", None).unwrap();
        t.add_subject_from_text("Bio", "3", "b+", None).unwrap();
        let modes: Vec<InputMode> = t.subjects().iter().map(SubjectEntry::mode).collect();
        assert_eq!(
            modes,
            vec![InputMode::Percentage, InputMode::Gpa, InputMode::Letter]
        );
    }

    #[test]
    fn test_from_text_rejects_bad_credit_text() {
        let mut t = tracker();
        let err = t
            .add_subject_from_text("Physics", "three", "A", None)
            .unwrap_err();
        assert_eq!(
            err,
            GradeError::InvalidCredit {
                value: "three".to_string()
            }
        );
        let err = t.add_subject_from_text("  ", "abc", "A", None).unwrap_err();
        assert_eq!(err, GradeError::EmptyName { what: "Subject" });
    }

    #[test]
    fn test_storage_failure_keeps_memory() {
        let mut t = tracker();
        t.store_mut().set_fail_saves(true);
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        assert_eq!(t.subjects().len(), 1);
        assert!((t.weighted_average() - 3.75).abs() < 1e-9);
        assert!(t
            .notifier()
            .iter()
            .any(|n| n.severity == Severity::Error && n.message.contains("quota exceeded")));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        let saves = t.store().save_count();
        assert!(!t.remove_subject(SubjectId(99)));
        assert_eq!(t.store().save_count(), saves);
        assert_eq!(t.subjects().len(), 1);
    }

    #[test]
    fn test_set_preset_unknown_keeps_state() {
        let mut t = tracker();
        assert!(matches!(
            t.set_preset("mit"),
            Err(GradeError::UnknownPreset { .. })
        ));
        assert_eq!(t.active_preset().id, "ugc");
    }

    #[test]
    fn test_set_preset_recomputes() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, GradeInput::Percentage(82.0)).unwrap();
        t.add_subject("Art", 3.0, GradeInput::Gpa(2.1)).unwrap();
        let warnings = t.set_preset("buet").unwrap();
        assert!(warnings.is_empty());
        assert_eq!(t.active_preset().id, "buet");
        assert_eq!(t.subjects()[0].label(), "A+");
        assert!((t.subjects()[1].grade_point() - 2.1).abs() < 1e-9);
        assert_eq!(t.store().state().unwrap().active_preset_id, "buet");
    }

    #[test]
    fn test_scenario_apply_restores_roster() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        t.save_scenario("  plan a ").unwrap();
        t.add_subject("Art", 3.0, letter("F")).unwrap();
        assert_eq!(t.scenario("plan a").unwrap().subjects.len(), 1);

        t.apply_scenario("plan a").unwrap();
        assert_eq!(t.subjects().len(), 1);
        assert_eq!(t.subjects()[0].name(), "Math");

        // Ids keep increasing after a snapshot replaced the roster
        let id = t.add_subject("History", 3.0, letter("B")).unwrap();
        assert!(id > SubjectId(2));
    }

    #[test]
    fn test_scenario_errors() {
        let mut t = tracker();
        assert!(matches!(
            t.save_scenario("   "),
            Err(GradeError::EmptyName { .. })
        ));
        assert!(matches!(
            t.apply_scenario("nope"),
            Err(GradeError::NotFound { .. })
        ));
        assert!(matches!(
            t.remove_scenario("nope"),
            Err(GradeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_scenario_names_sorted() {
        let mut t = tracker();
        t.save_scenario("beta").unwrap();
        t.save_scenario("alpha").unwrap();
        let names: Vec<&str> = t.scenario_names().collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_import_counts_rows() {
        let mut t = tracker();
        let rows = vec![
            ImportRow {
                name: "Math".to_string(),
                credit_text: "3".to_string(),
                value_text: "A".to_string(),
            },
            ImportRow {
                name: "Lab".to_string(),
                credit_text: "9".to_string(),
                value_text: "A".to_string(),
            },
            ImportRow {
                name: "Physics".to_string(),
                credit_text: "3".to_string(),
                value_text: "85".to_string(),
            },
        ];
        let report = t.import_rows(&rows);
        assert_eq!(report, ImportReport { imported: 2, errors: 1 });
        assert_eq!(t.subjects().len(), 2);
        assert_eq!(t.store().save_count(), 1);
        assert_eq!(t.notifier().last().unwrap().severity, Severity::Warning);
    }

    #[test]
    fn test_semesters_and_average() {
        let mut t = tracker();
        t.add_semester("Fall", "A").unwrap();
        t.add_semester("Spring", "B").unwrap();
        assert!((t.semester_average() - 3.375).abs() < 1e-9);
        assert!(matches!(
            t.add_semester("Summer", "Z"),
            Err(GradeError::UnknownGradeSymbol { .. })
        ));
        t.clear_semesters();
        assert!(t.semesters().is_empty());
    }

    #[test]
    fn test_plan_target_uses_live_roster() {
        let mut t = tracker();
        for name in ["A", "B", "C", "D", "E"] {
            t.add_subject(name, 3.0, letter("A+")).unwrap();
        }
        let result = t.plan_target(3.0, 3.0).unwrap();
        assert_eq!(result.outcome, PlanOutcome::AlreadyExceeded);
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        t.set_preset("nsu").unwrap();
        t.add_semester("Fall", "A-").unwrap();
        let store = t.close();

        let t: TestTracker = Tracker::open(store, Vec::new(), "ugc");
        assert_eq!(t.subjects().len(), 1);
        assert_eq!(t.semesters().len(), 1);
        assert_eq!(t.active_preset().id, "nsu");
    }

    #[test]
    fn test_close_without_changes_does_not_save() {
        let store = tracker().close();
        assert_eq!(store.save_count(), 0);
        assert!(store.state().is_none());
    }

    #[test]
    fn test_close_retries_failed_save() {
        let mut t = tracker();
        t.store_mut().set_fail_saves(true);
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        assert!(t.store().state().is_none());

        t.store_mut().set_fail_saves(false);
        let store = t.close();
        assert_eq!(store.state().unwrap().subjects.len(), 1);
    }

    #[test]
    fn test_unknown_stored_preset_falls_back() {
        let state = PersistedState {
            active_preset_id: "gone".to_string(),
            ..PersistedState::default()
        };
        let t: TestTracker = Tracker::open(MemoryStore::with_state(state), Vec::new(), "du");
        assert_eq!(t.active_preset().id, "du");
        assert_eq!(t.notifier()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_export_context_reflects_state() {
        let mut t = tracker();
        t.add_subject("Math", 3.0, letter("A")).unwrap();
        t.add_subject("Art", 3.0, letter("B")).unwrap();
        let ctx = t.export_context(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(ctx.subjects.len(), 2);
        assert!((ctx.total_credits - 6.0).abs() < 1e-9);
        assert_eq!(ctx.semester_count, 0);
    }
}
