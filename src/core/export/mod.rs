//! Export of roster data
//!
//! Exporters turn an [`ExportContext`] into CSV, a plain-text summary or a printable
//! HTML page. The context is built purely from tracker outputs.

pub mod csv_export;
pub mod html;
pub mod text;

pub use csv_export::CsvExporter;
pub use html::HtmlExporter;
pub use text::TextExporter;

use crate::core::error::ExportError;
use crate::core::models::SubjectEntry;
use crate::core::scale::GradingScalePreset;
use chrono::NaiveDate;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Data needed to render an export
#[derive(Debug, Clone)]
pub struct ExportContext<'a> {
    /// Subjects in roster order
    pub subjects: &'a [SubjectEntry],
    /// Active grading preset
    pub preset: &'static GradingScalePreset,
    /// Credit-weighted average of the roster
    pub weighted_gpa: f64,
    /// Total credit hours of the roster
    pub total_credits: f64,
    /// Unweighted mean of the semester history
    pub semester_average: f64,
    /// Number of semesters in the history
    pub semester_count: usize,
    /// Date printed on the export
    pub exported_on: NaiveDate,
}

impl ExportContext<'_> {
    /// Display name of the active preset
    #[must_use]
    pub const fn preset_name(&self) -> &'static str {
        self.preset.display_name
    }

    /// Export date as `YYYY-MM-DD`
    #[must_use]
    pub fn date_label(&self) -> String {
        self.exported_on.format("%Y-%m-%d").to_string()
    }
}

/// Format a grade-point the way every export shows it
#[must_use]
pub fn format_gpa(value: f64) -> String {
    format!("{value:.2}")
}

/// Trait for export generators
pub trait ExportGenerator {
    /// Render the export as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ExportContext) -> Result<String, ExportError>;

    /// Render the export and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ExportContext, output_path: &Path) -> Result<(), ExportError> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a summary block
    Csv,
    /// Plain-text summary for the clipboard
    Text,
    /// Printable HTML page
    Html,
}

impl ExportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "txt",
            Self::Html => "html",
        }
    }

    /// Generator for this format
    #[must_use]
    pub fn generator(&self) -> Box<dyn ExportGenerator> {
        match self {
            Self::Csv => Box::new(CsvExporter::new()),
            Self::Text => Box::new(TextExporter::new()),
            Self::Html => Box::new(HtmlExporter::new()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Text),
            "html" | "htm" | "print" => Ok(Self::Html),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
        }
    }
}
