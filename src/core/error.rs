//! Error types for the grade engine, storage and export layers.

use thiserror::Error;

/// Errors produced by grade resolution, roster validation, planning and scenario lookup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradeError {
    /// A subject, semester or scenario name was empty after trimming
    #[error("{what} name is required")]
    EmptyName {
        /// Which kind of entity was being named
        what: &'static str,
    },

    /// Credit hours were non-numeric or outside [0.5, 6.0]
    #[error("Credit must be between 0.5 and 6.0 (got '{value}')")]
    InvalidCredit {
        /// The rejected credit input, as given
        value: String,
    },

    /// A numeric grade value (percentage or GPA) could not be parsed
    #[error("'{value}' is not a valid number")]
    InvalidNumber {
        /// The rejected input text
        value: String,
    },

    /// Letter grade not present in the active preset
    #[error("Unknown grade symbol '{symbol}'")]
    UnknownGradeSymbol {
        /// The symbol that failed lookup
        symbol: String,
    },

    /// Preset id not registered
    #[error("Unknown grading preset '{id}'")]
    UnknownPreset {
        /// The requested preset id
        id: String,
    },

    /// No percentage band of the preset covers the value
    #[error("No grade band covers {percent}%")]
    NoMatchingBand {
        /// The percentage that could not be placed
        percent: f64,
    },

    /// Percentage outside [0, 100]
    #[error("Percentage {value} is outside 0-100")]
    OutOfRange {
        /// The rejected percentage
        value: f64,
    },

    /// Planner target outside (0, 4.0]
    #[error("Target CGPA must be between 0.01 and 4.00 (got {target})")]
    InvalidTarget {
        /// The rejected target average
        target: f64,
    },

    /// Planner remaining credits not positive
    #[error("Remaining credits must be greater than 0 (got {credits})")]
    InvalidCredits {
        /// The rejected remaining credit-hours
        credits: f64,
    },

    /// Scenario lookup failed
    #[error("Scenario '{name}' not found")]
    NotFound {
        /// The scenario name that was requested
        name: String,
    },
}

impl GradeError {
    /// Returns true for input validation failures (empty names, bad credits, malformed numbers).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName { .. } | Self::InvalidCredit { .. } | Self::InvalidNumber { .. }
        )
    }
}

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure injected by a test store
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Description of the simulated failure
        message: String,
    },
}

/// Errors raised while rendering or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the export failed
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTML template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Rendered bytes were not valid UTF-8
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_family() {
        assert!(GradeError::EmptyName { what: "Subject" }.is_validation());
        assert!(GradeError::InvalidCredit {
            value: "7".to_string()
        }
        .is_validation());
        assert!(!GradeError::OutOfRange { value: 101.0 }.is_validation());
    }

    #[test]
    fn test_messages() {
        let err = GradeError::EmptyName { what: "Semester" };
        assert_eq!(err.to_string(), "Semester name is required");

        let err = GradeError::UnknownGradeSymbol {
            symbol: "Z".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown grade symbol 'Z'");
    }
}
