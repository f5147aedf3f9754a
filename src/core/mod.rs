//! Grade-tracking engine
//!
//! Pure domain logic: grading scales, grade resolution, the subject roster and semester
//! history, the target planner, scenario snapshots, import/export, and the `Tracker`
//! that ties them to a store and a notifier.

pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod notify;
pub mod planner;
pub mod resolver;
pub mod roster;
pub mod scale;
pub mod scenario;
pub mod semesters;
pub mod storage;
pub mod tracker;

pub use error::{ExportError, GradeError, StorageError};
pub use export::{ExportContext, ExportFormat, ExportGenerator};
pub use import::{parse_import_csv, parse_import_file, ImportReport, ImportRow};
pub use models::{SemesterEntry, SemesterId, SubjectEntry, SubjectId};
pub use notify::{LogNotifier, Notification, Notifier, Severity};
pub use planner::{PlanOutcome, PlanResult};
pub use resolver::{detect_mode, resolve, GradeInput, InputMode, Resolution};
pub use scale::{default_preset, get_preset, list_presets, GradeSymbol, GradingScalePreset};
pub use scenario::{ScenarioBook, ScenarioResults, ScenarioSnapshot};
pub use storage::{JsonFileStore, MemoryStore, PersistedState, SnapshotStore};
pub use tracker::Tracker;
